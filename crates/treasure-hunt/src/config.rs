//! Configuration for the treasure hunt binary.
//!
//! Configuration is optional. When a YAML file is given with `--config`,
//! it is deserialized into [`HuntConfig`]; every field has a default, so a
//! partial or empty file is valid.
//!
//! ```yaml
//! logging:
//!   level: debug
//! output:
//!   treasure_header: "# T - x - y - remaining"
//!   explorer_header: "# A - name - x - y - orientation - collected"
//! ```
//!
//! `TREASURE_HUNT_LOG_LEVEL` overrides `logging.level` after loading.
//! `RUST_LOG`, when set, takes precedence over both.

use std::path::Path;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use treasure_notation::{DEFAULT_EXPLORER_HEADER, DEFAULT_TREASURE_HEADER, Headers};

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "TREASURE_HUNT_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level binary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HuntConfig {
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl HuntConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string. Blank input yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `treasure_core=trace`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Apply `TREASURE_HUNT_LOG_LEVEL` if it is set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_level_override(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// The directive to build the log filter from.
    ///
    /// `target=level` directives are passed through. A bare word that is
    /// not a level name (`trace` ... `error`, `off`) falls back to `info`.
    pub fn filter_directive(&self) -> &str {
        let level = self.level.trim();
        if level.contains('=') || level.parse::<LevelFilter>().is_ok() {
            level
        } else {
            "info"
        }
    }

    fn apply_level_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|level| !level.trim().is_empty()) {
            self.level = level;
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Comment line above the leftover treasures.
    #[serde(default = "default_treasure_header")]
    pub treasure_header: String,

    /// Comment line above the explorers.
    #[serde(default = "default_explorer_header")]
    pub explorer_header: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            treasure_header: default_treasure_header(),
            explorer_header: default_explorer_header(),
        }
    }
}

impl OutputConfig {
    /// The section headers to write.
    pub fn headers(&self) -> Headers {
        Headers {
            treasure: self.treasure_header.clone(),
            explorer: self.explorer_header.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_level() -> String {
    "info".to_owned()
}

fn default_treasure_header() -> String {
    DEFAULT_TREASURE_HEADER.to_owned()
}

fn default_explorer_header() -> String {
    DEFAULT_EXPLORER_HEADER.to_owned()
}
