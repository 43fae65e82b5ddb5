//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here; `--registry-url` also
//!    reads `TSCI_REGISTRY_URL` via clap's env support)
//! 2. Config file (`--config FILE`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use tsci_adapters::{registry, starter_files};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Registry endpoints.
    pub registry: RegistryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Package metadata endpoint polled by the advisory update check.
    pub metadata_url: String,
    /// Scoped-registry line written into new projects' `.npmrc`.
    pub scoped_registry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            metadata_url: registry::DEFAULT_METADATA_URL.into(),
            scoped_registry: starter_files::SCOPED_REGISTRY_LINE.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist and parse; the
    /// default-location file is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&body)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tsci.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tscircuit", "tsci")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tsci.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata_url_points_at_cli_package() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.registry.metadata_url,
            "https://registry.npmjs.org/@tscircuit/cli"
        );
    }

    #[test]
    fn default_scoped_registry_line() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.registry.scoped_registry,
            "@tsci:registry=https://npm.tscircuit.com"
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/tsci/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.no_color);
        // Unspecified sections keep their defaults.
        assert_eq!(
            cfg.registry.metadata_url,
            "https://registry.npmjs.org/@tscircuit/cli"
        );
    }

    #[test]
    fn garbage_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
