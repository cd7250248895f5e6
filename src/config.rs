//! Configuration management for the fedi extractor

use crate::error::{FediExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the CSV lands when no `--output` flag is given.
    pub default_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub enable_caching: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                default_path: PathBuf::from("fediverse_usernames.csv"),
            },
            processing: ProcessingConfig {
                enable_caching: true,
            },
        }
    }
}

impl Config {
    /// Load from `~/.fedi-extractor/config.toml`, falling back to the
    /// defaults when no config file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            FediExtractorError::Configuration(format!(
                "failed to parse '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            FediExtractorError::Configuration(format!("failed to serialize config: {}", e))
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".fedi-extractor").join("config.toml"))
    }
}
