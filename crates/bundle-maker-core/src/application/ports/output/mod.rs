//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bundle-maker-adapters` crate provides implementations.

use crate::domain::{ProjectStructure, ScaffoldRequest};
use crate::error::BundleMakerResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bundle_maker_adapters::filesystem::LocalFilesystem` (production)
/// - `bundle_maker_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Both operations overwrite/tolerate existing entries so that a re-run
/// with the same input is harmless.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> BundleMakerResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> BundleMakerResult<()>;
}

/// Port for rendering a bundle request into a concrete layout.
///
/// Implemented by:
/// - `bundle_maker_adapters::renderer::SymfonyBundleRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait BundleRenderer: Send + Sync {
    /// Render every directory and file of the bundle.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated request
    /// * `base_path` - Directory the bundle lives in; becomes the structure root
    fn render(
        &self,
        request: &ScaffoldRequest,
        base_path: &Path,
    ) -> BundleMakerResult<ProjectStructure>;
}
