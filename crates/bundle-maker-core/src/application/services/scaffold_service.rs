//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the request
//! 2. Render the bundle layout
//! 3. Write it to the filesystem, in order
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::{BundleRenderer, Filesystem},
    domain::{
        DomainValidator as validator, FsEntry, ProjectStructure, ScaffoldReport, ScaffoldRequest,
    },
    error::{BundleMakerError, BundleMakerResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn BundleRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ScaffoldService::new(
    ///     Box::new(SymfonyBundleRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(renderer: Box<dyn BundleRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Render the bundle without touching the filesystem.
    ///
    /// The returned structure is rooted at `<output_root>/bundles/<bundle>`.
    pub fn plan(
        &self,
        request: &ScaffoldRequest,
        output_root: impl AsRef<Path>,
    ) -> BundleMakerResult<ProjectStructure> {
        validator::validate_request(request).map_err(BundleMakerError::Domain)?;

        let base_path = resolve_base_path(output_root.as_ref(), &request.base_path());
        let structure = self.renderer.render(request, &base_path)?;

        validator::validate_project_structure(&structure).map_err(BundleMakerError::Domain)?;
        debug!(entries = structure.entry_count(), "Bundle rendered");

        Ok(structure)
    }

    /// Generate a bundle.
    ///
    /// Filesystem errors abort the run where they happen; entries already
    /// written stay on disk. Running twice with the same request overwrites
    /// the files and leaves the same tree.
    #[instrument(
        skip_all,
        fields(
            bundle = %request.namespace(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        request: &ScaffoldRequest,
        output_root: impl AsRef<Path>,
    ) -> BundleMakerResult<ScaffoldReport> {
        let structure = self.plan(request, output_root)?;
        let report = self.apply(&structure)?;

        debug!(package = %request.package_name(), "Bundle generated");
        Ok(report)
    }

    /// Write a planned structure to the filesystem.
    pub fn apply(&self, structure: &ProjectStructure) -> BundleMakerResult<ScaffoldReport> {
        validator::validate_project_structure(structure).map_err(BundleMakerError::Domain)?;

        debug!(root = %structure.root().display(), "Writing bundle");
        self.write_all(structure)?;

        let report = structure.report();
        debug!(files = report.files.len(), "Bundle written");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> BundleMakerResult<()> {
        let root = structure.root();
        let mut created: HashSet<PathBuf> = HashSet::new();

        // Create root
        self.filesystem.create_dir_all(root)?;
        created.insert(root.to_path_buf());

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                    created.insert(path);
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        if !created.contains(parent) {
                            self.filesystem.create_dir_all(parent)?;
                            created.insert(parent.to_path_buf());
                        }
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.content.len(), "File written");
                }
            }
        }

        Ok(())
    }
}

/// `bundles/<bundle>` under the output root; the current directory adds no prefix.
fn resolve_base_path(output_root: &Path, base_path: &Path) -> PathBuf {
    if output_root.as_os_str().is_empty() || output_root == Path::new(".") {
        base_path.to_path_buf()
    } else {
        output_root.join(base_path)
    }
}
