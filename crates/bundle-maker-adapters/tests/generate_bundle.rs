//! End-to-end generation on a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use bundle_maker_adapters::{LocalFilesystem, MemoryFilesystem, SymfonyBundleRenderer};
use bundle_maker_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

const DIRECTORIES: [&str; 12] = [
    "config",
    "src/Command",
    "src/Controller",
    "src/DependencyInjection",
    "src/EventSubscriber",
    "src/Security",
    "src/Service",
    "public",
    "translations",
    "templates",
    "tests",
    "assets",
];

fn service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(SymfonyBundleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn request(version: Option<&str>) -> ScaffoldRequest {
    let mut builder = ScaffoldRequest::builder()
        .bundle_name("Blog")
        .vendor_name("Acme");
    if let Some(v) = version {
        builder = builder.version(v);
    }
    builder.build().unwrap()
}

/// Relative path -> content for every file under `root`.
fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    let mut files: Vec<(PathBuf, String)> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read_to_string(e.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}

#[test]
fn text_files_match_the_symfony_layout_byte_for_byte() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(None), tmp.path()).unwrap();
    let base = tmp.path().join("bundles/Blog");

    assert_eq!(
        fs::read_to_string(base.join("templates/index.html.twig")).unwrap(),
        "{# Twig template #}\n<h1>Blog Bundle</h1>"
    );
    assert_eq!(
        fs::read_to_string(base.join("config/routes.yaml")).unwrap(),
        "# Add your routes here\n"
    );
    for file in [
        "composer.json",
        "src/BlogBundle.php",
        "src/DependencyInjection/BlogExtension.php",
        "flex-recipe/manifest.json",
    ] {
        let content = fs::read_to_string(base.join(file)).unwrap();
        assert!(content.ends_with('}'), "{file} ends with {:?}", content.chars().last());
    }
}

#[test]
fn every_directory_holds_exactly_one_marker() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(None), tmp.path()).unwrap();
    let base = tmp.path().join("bundles/Blog");

    for dir in DIRECTORIES {
        let path = base.join(dir);
        assert!(path.is_dir(), "{dir} missing");
        let marker = path.join(".gitkeep");
        assert_eq!(fs::read_to_string(&marker).unwrap(), "", "{dir}");

        let markers = WalkDir::new(&path)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_name() == ".gitkeep")
            .count();
        assert_eq!(markers, 1, "{dir}");
    }
}

#[test]
fn composer_manifest_on_disk() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(Some("2")), tmp.path()).unwrap();

    let raw = fs::read_to_string(tmp.path().join("bundles/Blog/composer.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["name"], "acme/blog");
    assert_eq!(doc["version"], "2");
    assert_eq!(doc["autoload"]["psr-4"]["Acme\\Blog\\"], "src/");
}

#[test]
fn version_defaults_to_one() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(None), tmp.path()).unwrap();

    let raw = fs::read_to_string(tmp.path().join("bundles/Blog/composer.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["version"], "1");
}

#[test]
fn php_classes_reference_each_other() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(None), tmp.path()).unwrap();
    let base = tmp.path().join("bundles/Blog");

    let bundle = fs::read_to_string(base.join("src/BlogBundle.php")).unwrap();
    assert!(bundle.contains("class BlogBundle extends"));
    assert!(bundle.contains("BlogExtension::class"));

    let extension =
        fs::read_to_string(base.join("src/DependencyInjection/BlogExtension.php")).unwrap();
    assert!(extension.contains("namespace Acme\\Blog\\DependencyInjection;"));
}

#[test]
fn recipe_and_services_are_written() {
    let tmp = TempDir::new().unwrap();
    service().generate(&request(None), tmp.path()).unwrap();
    let base = tmp.path().join("bundles/Blog");

    let recipe: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(base.join("flex-recipe/manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(recipe["bundles"]["Blog"]["all"], true);

    let services: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(base.join("config/services.yaml")).unwrap())
            .unwrap();
    assert_eq!(
        services["services"]["Acme\\Blog\\Command\\"]["resource"],
        serde_yaml::Value::from("../src/Command/*")
    );
}

#[test]
fn rerun_leaves_identical_tree() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("bundles/Blog");

    service().generate(&request(None), tmp.path()).unwrap();
    let first = snapshot(&base);
    service().generate(&request(None), tmp.path()).unwrap();
    let second = snapshot(&base);

    assert_eq!(first, second);
    assert_eq!(first.len(), 12 + 7);
}

#[test]
fn memory_filesystem_matches_disk_layout() {
    let memory = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(SymfonyBundleRenderer::new()),
        Box::new(memory.clone()),
    );
    let report = service.generate(&request(None), ".").unwrap();

    assert_eq!(report.base_path, PathBuf::from("bundles/Blog"));
    assert_eq!(memory.list_files().len(), 12 + 7);
    assert!(memory.is_dir(Path::new("bundles/Blog/flex-recipe")));
}
