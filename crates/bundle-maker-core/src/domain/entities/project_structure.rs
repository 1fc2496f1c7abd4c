use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Zero-byte marker that keeps otherwise empty directories under version control.
pub const KEEP_MARKER: &str = ".gitkeep";

/// Final bundle layout ready for materialization.
///
/// This is the output of rendering: a root directory and an ordered list of
/// entries relative to it. Entries are written in insertion order.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    root: PathBuf,
    entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content: content.into(),
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    /// Add a directory followed by its empty [`KEEP_MARKER`] file.
    pub fn add_kept_directory(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let marker = path.join(KEEP_MARKER);
        self.add_directory(path);
        self.add_file(marker, String::new());
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidStructure(
                "Project structure is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Summary of what this structure creates, relative to the root.
    pub fn report(&self) -> ScaffoldReport {
        ScaffoldReport {
            base_path: self.root.clone(),
            directories: self.directories().map(|d| d.path.clone()).collect(),
            files: self.files().map(|f| f.path.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// Outcome of a scaffold run (or the plan of a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub base_path: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}
