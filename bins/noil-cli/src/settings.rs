//! CLI settings.
//!
//! Layered, lowest precedence first: built-in defaults, an optional TOML
//! file (`--config`, else `<config_dir>/noil/config.toml`), then `NOIL_*`
//! environment variables. Command-line flags override all of them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level filter string (e.g. "info", "debug", "noil_core=trace").
    pub log_level: String,
    /// Log output format: "text" or "json".
    pub log_format: String,
    /// Household size used by `score` when `--household` is omitted.
    pub default_household_size: u32,
    /// Base points used by `score` when `--base-points` is omitted.
    pub default_base_points: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            default_household_size: 1,
            default_base_points: 100,
        }
    }
}

impl CliConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("noil").join("config.toml"))
    }

    /// Load from `path` (or the default location) plus the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let mut builder = config::Config::builder();
        if let Some(path) = &path {
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }
        builder = builder.add_source(config::Environment::with_prefix("NOIL").try_parsing(true));

        builder
            .build()
            .and_then(|c| c.try_deserialize::<CliConfig>())
            .with_context(|| match &path {
                Some(p) => format!("Failed to load config from {}", p.display()),
                None => "Failed to load config from environment".to_string(),
            })
    }
}
