//! Configuration handling for docsift.
//!
//! Loaded from `config.toml` in the docsift config directory unless a path is
//! given on the command line. A missing file means defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use docsift_core::UnregisteredPolicy;
use docsift_search::DEFAULT_ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Search and display configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Extraction configuration
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search and display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result rows per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// What to record for files whose MIME type has no extractor
    #[serde(default)]
    pub unregistered_policy: UnregisteredPolicy,

    /// Largest file accepted from disk (bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_max_file_size() -> u64 {
    52_428_800 // 50MB
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            unregistered_policy: UnregisteredPolicy::default(),
            max_file_size: default_max_file_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default config path when `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read(&path)?,
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.search.items_per_page == 0 {
            anyhow::bail!("search.items_per_page must be greater than 0");
        }
        self.logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("invalid logging.level: {:?}", self.logging.level))?;
        Ok(())
    }

    /// Configured log level.
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .level
            .parse()
            .unwrap_or(tracing::Level::WARN)
    }

    /// Default config file path.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Sample configuration file with every option at its default.
    pub fn sample_toml() -> String {
        format!(
            r#"# docsift configuration

[search]
# Result rows per page
items_per_page = {items_per_page}

[extract]
# What to record for files whose MIME type has no extractor: "empty" or "error"
unregistered_policy = "empty"
# Largest file read from disk, in bytes
max_file_size = {max_file_size}

[logging]
# One of: trace, debug, info, warn, error
level = "{level}"
"#,
            items_per_page = default_items_per_page(),
            max_file_size = default_max_file_size(),
            level = default_log_level(),
        )
    }
}

/// Get the XDG config directory for docsift.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DOCSIFT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "docsift").map(|dirs| dirs.config_dir().to_path_buf())
}
