//! Persisted game settings.
//!
//! The engine consumes a small key-value settings store (ring count and
//! player names) read once at game start. Settings live in a TOML file;
//! a missing file yields the defaults, matching the behavior of the
//! settings screens that write these values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings consumed at game start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Number of concentric rings; fixes board size and piece allotment.
    pub rings: i32,

    /// Display name for seat one.
    pub player1_name: String,

    /// Display name for seat two.
    pub player2_name: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rings: 3,
            player1_name: "Player1".to_string(),
            player2_name: "Player2".to_string(),
        }
    }
}

/// Errors from loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl GameSettings {
    /// Load settings from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned, the same
    /// way a fresh install starts with default names and a 3-ring board.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Write settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
