//! Configuration loading.
//!
//! Handles:
//! - Input length cap applied before normalization
//! - Default output format

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default cap on input length in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// Get the default config file path.
fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "dnsfence", "humanidctl")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inputs longer than this many bytes are rejected before parsing.
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,

    /// Default output format (`table` or `json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_max_input_len() -> usize {
    DEFAULT_MAX_INPUT_LEN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            format: None,
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location.
    ///
    /// A missing file yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an existing file.
    fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        if config.max_input_len == 0 {
            anyhow::bail!("Invalid config {:?}: max_input_len must be positive", path);
        }

        Ok(config)
    }
}
