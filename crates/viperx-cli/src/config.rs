//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `VIPERX__DEFAULTS__AUTHOR=...`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use viperx_core::domain::{License, ProjectKind};

const ENV_PREFIX: &str = "VIPERX";

/// Application configuration.
///
/// Every section falls back to its default, so a file or environment only
/// needs to name the keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub license: String,
    pub python_version: String,
    pub project_type: String,
    pub explain: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: None,
            license: License::default().to_string(),
            python_version: "3.11".into(),
            project_type: ProjectKind::default().to_string(),
            explain: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Override directory; [`AppConfig::default_template_dir`] when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::load_from(path, true),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let cfg: Self = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an invalid shape")?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, mid-command.
    fn validate(&self) -> anyhow::Result<()> {
        self.license()?;
        self.project_kind()?;
        Ok(())
    }

    pub fn license(&self) -> anyhow::Result<License> {
        License::from_str(&self.defaults.license)
            .with_context(|| "Invalid value for 'defaults.license'".to_string())
    }

    pub fn project_kind(&self) -> anyhow::Result<ProjectKind> {
        ProjectKind::from_str(&self.defaults.project_type)
            .with_context(|| "Invalid value for 'defaults.project_type'".to_string())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.viperx.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "viperx", "viperx")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".viperx.toml"))
    }

    /// `templates/` next to the default configuration file.
    pub fn default_template_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "viperx", "viperx")
            .map(|d| d.config_dir().join("templates"))
            .unwrap_or_else(|| PathBuf::from(".viperx/templates"))
    }

    /// Override directory: the flag, then `templates.user_dir`, then the
    /// platform default.
    pub fn template_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.templates.user_dir.clone())
            .unwrap_or_else(Self::default_template_dir)
    }
}
