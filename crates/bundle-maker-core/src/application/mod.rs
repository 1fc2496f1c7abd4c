//! Application layer for bundle-maker.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no
//! rendering knowledge itself; that lives behind `BundleRenderer`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{BundleRenderer, Filesystem};

pub use error::ApplicationError;
