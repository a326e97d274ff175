//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `WRAPGEN__SECTION__KEY`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use wrapgen_core::domain::Backend;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation settings.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Backends used when a command names none. Empty means all of them.
    pub backends: Vec<String>,
    /// Treat every run as `--fail-fast`.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                backends: Vec::new(),
                fail_fast: false,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    /// Like [`Self::load`], but an explicit `config_file` may be absent.
    ///
    /// Used by `init`, whose job is to create that file.
    pub fn load_if_present(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(p) => Self::load_from(p, false),
            None => Self::load(None),
        }
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("generation.backends", defaults.generation.backends)?
            .set_default("generation.fail_fast", defaults.generation.fail_fast)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("WRAPGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("generation.backends")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Parse the configured default backends.
    pub fn default_backends(&self) -> Result<Vec<Backend>, String> {
        self.generation
            .backends
            .iter()
            .map(|b| b.parse::<Backend>().map_err(|e| e.to_string()))
            .collect()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wrapgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wrapgen", "wrapgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wrapgen.toml"))
    }
}
