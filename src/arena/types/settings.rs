//! Game settings types and persistence
//!
//! Settings live in a RON file. Every field has a default so partial files
//! load, and a missing file means "all defaults".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Hard limit on seats at the table
pub const MAX_PLAYERS: usize = 6;

pub const DEFAULT_SETTINGS_FILE: &str = "dicearena.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default = "default_max_players")]
    pub max_players: usize,

    /// New players are named "<prefix> <id>"
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// How long each die spins
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Deadline after which the round settles even if some spins never
    /// reported back. Must not be shorter than the spin itself.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Redraw interval of the terminal spinner
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,

    #[serde(default = "default_sound")]
    pub sound: bool,
}

fn default_max_players() -> usize {
    MAX_PLAYERS
}
fn default_name_prefix() -> String {
    "Player".to_string()
}
fn default_animation_ms() -> u64 {
    3000
}
fn default_settle_delay_ms() -> u64 {
    3200
}
fn default_frame_ms() -> u64 {
    50
}
fn default_sound() -> bool {
    true
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_players: default_max_players(),
            name_prefix: default_name_prefix(),
            animation_ms: default_animation_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            frame_ms: default_frame_ms(),
            sound: default_sound(),
        }
    }
}

impl GameSettings {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_players == 0 || self.max_players > MAX_PLAYERS {
            return Err(format!(
                "max_players must be between 1 and {}, got {}",
                MAX_PLAYERS, self.max_players
            ));
        }
        if self.animation_ms == 0 {
            return Err("animation_ms must be greater than 0".to_string());
        }
        if self.frame_ms == 0 {
            return Err("frame_ms must be greater than 0".to_string());
        }
        if self.settle_delay_ms < self.animation_ms {
            return Err(format!(
                "settle_delay_ms ({}) must not be shorter than animation_ms ({})",
                self.settle_delay_ms, self.animation_ms
            ));
        }
        Ok(())
    }

    pub fn from_ron(text: &str) -> Result<Self, String> {
        let settings: GameSettings =
            ron::from_str(text).map_err(|e| format!("Failed to parse settings: {e}"))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_ron(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {e}"))
    }

    /// Load settings from `path`, falling back to defaults if the file does
    /// not exist. A file that exists but is malformed is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
        let settings = Self::from_ron(&text)
            .map_err(|e| format!("{} ({})", e, path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        self.validate()?;
        let text = self.to_ron()?;
        fs::write(path, text)
            .map_err(|e| format!("Failed to write settings {}: {e}", path.display()))?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}
