//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `BUNDLE_MAKER_<SECTION>__<KEY>`
//! 3. Config file: `--config FILE` (must exist), else `.bundle-maker.toml`
//!    in the current directory, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use bundle_maker_core::domain::DEFAULT_VERSION;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "BUNDLE_MAKER";

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".bundle-maker.toml";

/// Every key accepted by `config get` / `config set`.
pub const KNOWN_KEYS: [&str; 5] = [
    "defaults.vendor",
    "defaults.version",
    "output.root",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new bundles.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Vendor used when `--vendor` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Version offered when `--bundle-version` is absent.
    pub version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            vendor: None,
            version: DEFAULT_VERSION.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory under which `bundles/` is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: None,
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path passed via `--config`; when given it must exist.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::load_from(path, true),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path of the configuration file in effect when `--config` is absent.
    ///
    /// A `.bundle-maker.toml` in the current directory wins over the global file.
    pub fn config_path() -> PathBuf {
        let local = Self::local_config_path();
        if local.is_file() {
            local
        } else {
            Self::global_config_path()
        }
    }

    /// `.bundle-maker.toml` in the current directory.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to the local file when no home directory is known.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bundle-maker", "bundle-maker")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_config_path)
    }

    /// Value of a dotted key as displayed by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.vendor" => self.defaults.vendor.clone().unwrap_or_default(),
            "defaults.version" => self.defaults.version.clone(),
            "output.root" => self
                .output
                .root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.vendor, None);
        assert_eq!(cfg.defaults.version, "1");
        assert_eq!(cfg.output.format, "auto");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.defaults.version, AppConfig::default().defaults.version);
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nvendor = \"Acme\"\n\n[output]\nroot = \"packages\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.vendor.as_deref(), Some("Acme"));
        assert_eq!(cfg.defaults.version, "1");
        assert_eq!(cfg.output.root, Some(PathBuf::from("packages")));
    }

    #[test]
    fn malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[defaults\nvendor = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.version").as_deref(), Some("1"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("defaults.vendor").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn every_known_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
