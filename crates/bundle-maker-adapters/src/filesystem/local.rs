//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use bundle_maker_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BundleMakerError, BundleMakerResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Existing directories are accepted and existing files are overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BundleMakerResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BundleMakerResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BundleMakerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
