//! Infrastructure adapters for bundle-maker.
//!
//! This crate implements the ports defined in `bundle_maker_core::application::ports`.
//! It contains all serializers and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SymfonyBundleRenderer;
