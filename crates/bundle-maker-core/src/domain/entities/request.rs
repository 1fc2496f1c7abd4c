use std::fmt;
use std::path::PathBuf;

use crate::domain::{
    common::normalize,
    error::DomainError,
    value_objects::{Namespace, PackageName},
};

/// Directory (relative to the output root) that receives every generated bundle.
pub const BUNDLES_DIR: &str = "bundles";

/// Version written to `composer.json` when the caller supplies none.
pub const DEFAULT_VERSION: &str = "1";

/// Everything needed to scaffold one bundle.
///
/// Built through [`ScaffoldRequest::builder`]; `build()` is the only gate,
/// so a `ScaffoldRequest` in hand always has a bundle and vendor name.
/// Names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    bundle_name: String,
    vendor_name: String,
    version: String,
}

impl ScaffoldRequest {
    pub fn builder() -> ScaffoldRequestBuilder {
        ScaffoldRequestBuilder::default()
    }

    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `Vendor\Bundle`
    pub fn namespace(&self) -> Namespace {
        Namespace::new(&self.vendor_name, &self.bundle_name)
    }

    /// `lowercase(vendor/bundle)`
    pub fn package_name(&self) -> PackageName {
        PackageName::new(&self.vendor_name, &self.bundle_name)
    }

    /// `bundles/<bundle>`, normalized.
    pub fn base_path(&self) -> PathBuf {
        normalize(&format!("{BUNDLES_DIR}/{}", self.bundle_name))
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        require("bundle name", &self.bundle_name)?;
        require("vendor name", &self.vendor_name)?;
        Ok(())
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) v{}", self.namespace(), self.package_name(), self.version)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingRequiredField { field });
    }
    Ok(())
}

/// Builder for [`ScaffoldRequest`].
#[derive(Debug, Default, Clone)]
pub struct ScaffoldRequestBuilder {
    bundle_name: Option<String>,
    vendor_name: Option<String>,
    version: Option<String>,
}

impl ScaffoldRequestBuilder {
    pub fn bundle_name(mut self, name: impl Into<String>) -> Self {
        self.bundle_name = Some(name.into());
        self
    }

    pub fn vendor_name(mut self, name: impl Into<String>) -> Self {
        self.vendor_name = Some(name.into());
        self
    }

    /// Set the version. An empty string falls back to [`DEFAULT_VERSION`].
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<ScaffoldRequest, DomainError> {
        let request = ScaffoldRequest {
            bundle_name: self.bundle_name.unwrap_or_default(),
            vendor_name: self.vendor_name.unwrap_or_default(),
            version: self
                .version
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        };
        request.validate()?;
        Ok(request)
    }
}
