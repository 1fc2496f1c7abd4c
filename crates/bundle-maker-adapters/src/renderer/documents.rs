//! Structured documents: `composer.json`, `config/services.yaml` and the
//! Flex recipe manifest.
//!
//! Each document is built as a typed value and handed to a serializer, so
//! user-supplied names are always escaped/quoted correctly.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use bundle_maker_core::{
    application::ApplicationError,
    domain::{Namespace, ScaffoldRequest},
    error::BundleMakerError,
};

/// Package type understood by Symfony Flex.
pub const PACKAGE_TYPE: &str = "symfony-bundle";

/// `require` section of every generated `composer.json`.
pub const REQUIREMENTS: [(&str, &str); 2] =
    [("php", "^8.4"), ("symfony/framework-bundle", "^6.4")];

/// Indentation used for JSON documents.
const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("serializer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<DocumentError> for BundleMakerError {
    fn from(err: DocumentError) -> Self {
        ApplicationError::RenderingFailed {
            reason: err.to_string(),
        }
        .into()
    }
}

// ── composer.json ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ComposerManifest {
    name: String,
    description: String,
    #[serde(rename = "type")]
    kind: &'static str,
    autoload: Autoload,
    require: BTreeMap<&'static str, &'static str>,
    version: String,
}

#[derive(Debug, Serialize)]
struct Autoload {
    #[serde(rename = "psr-4")]
    psr4: BTreeMap<String, &'static str>,
}

/// Render the Composer package descriptor.
pub fn render_composer_manifest(request: &ScaffoldRequest) -> Result<String, DocumentError> {
    let manifest = ComposerManifest {
        name: request.package_name().to_string(),
        description: format!("{} Symfony Bundle", request.bundle_name()),
        kind: PACKAGE_TYPE,
        autoload: Autoload {
            psr4: BTreeMap::from([(request.namespace().prefix(), "src/")]),
        },
        require: BTreeMap::from(REQUIREMENTS),
        version: request.version().to_string(),
    };
    to_pretty_json(&manifest)
}

// ── flex-recipe/manifest.json ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RecipeManifest {
    bundles: BTreeMap<String, BundleEnvironments>,
}

#[derive(Debug, Serialize)]
struct BundleEnvironments {
    all: bool,
}

/// Render the Flex recipe manifest enabling the bundle in every environment.
pub fn render_recipe_manifest(bundle_name: &str) -> Result<String, DocumentError> {
    let recipe = RecipeManifest {
        bundles: BTreeMap::from([(bundle_name.to_string(), BundleEnvironments { all: true })]),
    };
    to_pretty_json(&recipe)
}

// ── config/services.yaml ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ServiceDefaults {
    autowire: bool,
    autoconfigure: bool,
    public: bool,
}

#[derive(Debug, Serialize)]
struct ResourceRule {
    resource: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'static str>,
}

/// Source directories registered as services, with their extra tags.
const RESOURCE_RULES: [(&str, &[&str]); 3] = [
    ("Command", &["console.command"]),
    ("Service", &[]),
    ("EventSubscriber", &[]),
];

/// Render the service container configuration.
///
/// Key order is significant to readers (`_defaults` first), so the document
/// is an ordered [`Mapping`] rather than a sorted map.
pub fn render_services_config(namespace: &Namespace) -> Result<String, DocumentError> {
    let mut services = Mapping::new();
    services.insert(
        Value::from("_defaults"),
        serde_yaml::to_value(ServiceDefaults {
            autowire: true,
            autoconfigure: true,
            public: true,
        })?,
    );

    for (segment, tags) in RESOURCE_RULES {
        let rule = ResourceRule {
            resource: format!("../src/{segment}/*"),
            tags: tags.to_vec(),
        };
        services.insert(
            Value::from(namespace.child(segment).prefix()),
            serde_yaml::to_value(rule)?,
        );
    }

    let mut document = Mapping::new();
    document.insert(Value::from("services"), Value::Mapping(services));
    Ok(serde_yaml::to_string(&document)?)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, DocumentError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}
