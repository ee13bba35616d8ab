//! fetools configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fetools_css::{DEFAULT_REM_BASE, DEFAULT_VARIABLE_NAME};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "fetools.toml";

/// Top-level fetools configuration (fetools.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FetoolsConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// CSS output settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Root font size for px to rem conversion
    #[serde(default = "default_rem_base")]
    pub rem_base: f64,
    /// Custom property name for single clamp() variables
    #[serde(default = "default_variable_name")]
    pub variable_name: String,
}

fn default_rem_base() -> f64 {
    DEFAULT_REM_BASE
}

fn default_variable_name() -> String {
    DEFAULT_VARIABLE_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            rem_base: default_rem_base(),
            variable_name: default_variable_name(),
        }
    }
}

/// Where tool state is persisted
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one JSON file per tool
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".fetools")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl FetoolsConfig {
    /// Load configuration from a file or a directory containing fetools.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FetoolsConfig = toml::from_str(content)?;
        let rem_base = config.output.rem_base;
        if rem_base.is_nan() || rem_base <= 0.0 {
            anyhow::bail!("output.rem_base must be positive, got {}", config.output.rem_base);
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
