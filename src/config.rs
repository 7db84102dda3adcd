//! Configuration types for the branch checklist

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = ".bcu.toml";

/// Configuration for the branch checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Branch names that are never offered for deletion
    pub protected_branches: Vec<String>,

    /// Switch to the alternate screen buffer while the checklist is shown
    pub alternate_screen: bool,

    /// Terminal width used when the real size cannot be queried
    pub fallback_width: u16,

    /// Delete the confirmed branches instead of only printing them
    pub delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_branches: vec!["main".into(), "master".into()],
            alternate_screen: true,
            fallback_width: 80,
            delete: false,
        }
    }
}

impl Config {
    /// Check whether a branch name is protected
    pub fn is_protected(&self, branch: &str) -> bool {
        self.protected_branches.iter().any(|b| b == branch)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Load the explicit config file, or `.bcu.toml` from `dir` if present,
    /// or fall back to defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            Self::load_from_file(local)
        } else {
            Ok(Self::default())
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read config file '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
