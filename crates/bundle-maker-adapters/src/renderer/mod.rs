//! Bundle renderers.

pub mod documents;
mod sources;
mod symfony;

pub use documents::DocumentError;
pub use symfony::SymfonyBundleRenderer;
