use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use draughts_core::Color;

use crate::error::ConfigError;

/// Game settings, usually read from `draughts.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side played by the human. White moves first.
    pub human: Color,
    /// Seed for the computer's move choice; random when absent.
    pub seed: Option<u64>,
    /// Directory receiving one JSON record per finished game.
    pub record_dir: Option<PathBuf>,
    pub stats_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            seed: None,
            record_dir: None,
            stats_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
