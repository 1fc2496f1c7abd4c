//! Symfony bundle renderer.

use std::path::Path;

use tracing::{debug, instrument};

use bundle_maker_core::{
    application::ports::BundleRenderer,
    domain::{ProjectStructure, RenderContext, ScaffoldRequest},
    error::BundleMakerResult,
};

use super::{documents, sources};
use crate::builtin_templates::BUNDLE_DIRECTORIES;

/// Renders the modern Symfony bundle layout.
///
/// Directories come first, each with its `.gitkeep` marker, followed by
/// the generated files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymfonyBundleRenderer;

impl SymfonyBundleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl BundleRenderer for SymfonyBundleRenderer {
    #[instrument(skip_all, fields(bundle = request.bundle_name()))]
    fn render(
        &self,
        request: &ScaffoldRequest,
        base_path: &Path,
    ) -> BundleMakerResult<ProjectStructure> {
        let ctx = RenderContext::new(request);
        let bundle = request.bundle_name();
        let mut structure = ProjectStructure::new(base_path);

        for dir in BUNDLE_DIRECTORIES {
            structure.add_kept_directory(dir);
        }

        structure.add_file("composer.json", documents::render_composer_manifest(request)?);
        structure.add_file(format!("src/{bundle}Bundle.php"), sources::bundle_class(&ctx));
        structure.add_file(
            format!("src/DependencyInjection/{bundle}Extension.php"),
            sources::extension_class(&ctx),
        );
        structure.add_file("config/routes.yaml", sources::routes_config(&ctx));
        structure.add_file(
            "config/services.yaml",
            documents::render_services_config(&request.namespace())?,
        );
        structure.add_file("templates/index.html.twig", sources::index_template(&ctx));
        structure.add_file(
            "flex-recipe/manifest.json",
            documents::render_recipe_manifest(bundle)?,
        );

        debug!(entries = structure.entry_count(), "Symfony bundle rendered");
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(bundle: &str, vendor: &str) -> ProjectStructure {
        let request = ScaffoldRequest::builder()
            .bundle_name(bundle)
            .vendor_name(vendor)
            .build()
            .unwrap();
        SymfonyBundleRenderer::new()
            .render(&request, Path::new("bundles").join(bundle).as_path())
            .unwrap()
    }

    #[test]
    fn renders_every_directory_with_a_marker() {
        let structure = render("Blog", "Acme");
        let dirs: Vec<PathBuf> = structure.directories().map(|d| d.path.clone()).collect();
        let expected: Vec<PathBuf> = BUNDLE_DIRECTORIES.iter().map(PathBuf::from).collect();
        assert_eq!(dirs, expected);

        for dir in BUNDLE_DIRECTORIES {
            let marker = Path::new(dir).join(".gitkeep");
            let file = structure
                .files()
                .find(|f| f.path == marker)
                .unwrap_or_else(|| panic!("missing marker in {dir}"));
            assert!(file.is_empty());
        }
    }

    #[test]
    fn renders_generated_files_in_order() {
        let structure = render("Blog", "Acme");
        let generated: Vec<PathBuf> = structure
            .files()
            .filter(|f| !f.path.ends_with(".gitkeep"))
            .map(|f| f.path.clone())
            .collect();

        assert_eq!(
            generated,
            [
                "composer.json",
                "src/BlogBundle.php",
                "src/DependencyInjection/BlogExtension.php",
                "config/routes.yaml",
                "config/services.yaml",
                "templates/index.html.twig",
                "flex-recipe/manifest.json",
            ]
            .map(PathBuf::from)
        );
    }

    #[test]
    fn structure_is_rooted_at_base_path_and_valid() {
        let structure = render("Shop", "Vendor");
        assert_eq!(structure.root(), Path::new("bundles/Shop"));
        assert!(structure.validate().is_ok());
        assert_eq!(structure.entry_count(), 12 * 2 + 7);
    }
}
