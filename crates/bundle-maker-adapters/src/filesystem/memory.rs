//! In-memory filesystem adapter for tests and previews.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use bundle_maker_core::{
    application::{ApplicationError, ports::Filesystem},
    error::BundleMakerResult,
};

/// In-memory filesystem. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn write_lock(&self) -> BundleMakerResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| {
            ApplicationError::AdapterUnavailable {
                name: "memory filesystem",
            }
            .into()
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> BundleMakerResult<()> {
        let mut inner = self.write_lock()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BundleMakerResult<()> {
        let mut inner = self.write_lock()?;

        // Parent must exist, as on disk
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
