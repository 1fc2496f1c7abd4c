//! Domain value objects: Namespace, PackageName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! know how to render themselves in the notation the host framework expects
//! (`Vendor\Bundle` for PHP namespaces, `vendor/bundle` for Composer
//! packages) and nothing else.

use serde::{Serialize, Serializer};
use std::fmt;

// ── Namespace ────────────────────────────────────────────────────────────────

/// A hierarchical PHP namespace, e.g. `Acme\Blog`.
///
/// Segments are kept verbatim; they are never re-cased or validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    pub const SEPARATOR: char = '\\';

    /// Build the two-segment `Vendor\Bundle` namespace of a bundle.
    pub fn new(vendor: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            segments: vec![vendor.into(), bundle.into()],
        }
    }

    /// Namespace one level deeper, e.g. `Acme\Blog` -> `Acme\Blog\DependencyInjection`.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The namespace as a PSR-4 prefix, i.e. with a trailing separator.
    ///
    /// `Acme\Blog` -> `Acme\Blog\`
    pub fn prefix(&self) -> String {
        format!("{self}{}", Self::SEPARATOR)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── PackageName ──────────────────────────────────────────────────────────────

/// A Composer package name: `lowercase(vendor + "/" + bundle)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(vendor: &str, bundle: &str) -> Self {
        Self(format!("{vendor}/{bundle}").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
