//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.puzzlebox/config.toml` (or under `$PUZZLEBOX_HOME`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors that can occur while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or writing the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`GlobalConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Global puzzlebox configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Puzzle input settings
    #[serde(default)]
    pub input: InputConfig,
    /// Binary diagnostic settings
    #[serde(default)]
    pub diagnostic: DiagnosticConfig,
}

/// Puzzle input settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Input cache directory, replacing `<home>/input`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Binary diagnostic settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticConfig {
    /// Fail instead of reporting when a column has no most common bit
    #[serde(default)]
    pub reject_ties: bool,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or the default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::try_load_from(&Self::config_path()).unwrap_or_default()
    }

    /// Load config from disk, surfacing parse errors
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::try_load_from(&Self::config_path())
    }

    /// Load config from a specific file; a missing file gives the default
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Directory holding cached puzzle inputs
    #[must_use]
    pub fn input_dir(&self) -> PathBuf {
        self.input.dir.clone().unwrap_or_else(paths::input_cache_dir)
    }
}
