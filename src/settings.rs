//! Demo settings
//!
//! Fixed at startup. Read from a JSON file when one is given, otherwise the
//! defaults reproduce the classic 960x640 window with 32 px cells.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "GRIDCAST_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,

    // === Geometry ===
    /// Window width in pixels
    pub screen_width: u32,
    /// Window height in pixels
    pub screen_height: u32,
    /// Grid cell edge in pixels
    pub cell_size: u32,

    // === Entities ===
    /// Player speed in pixels per tick
    pub player_speed: i32,
    /// Edge of the player and cursor boxes in pixels
    pub box_size: i32,

    // === HUD ===
    /// Draw the frames/ticks per second overlay
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: GAME_TITLE.to_string(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            player_speed: PLAYER_SPEED,
            box_size: BOX_SIZE,
            show_stats: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Settings from an optional path, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err} ({}), using default settings", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_size == 0 {
            return Err(SettingsError::Invalid("cell_size must be positive".into()));
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err(SettingsError::Invalid(format!(
                "window {}x{} cannot hold a {}px cell",
                self.screen_width, self.screen_height, self.cell_size
            )));
        }
        if self.box_size <= 0 {
            return Err(SettingsError::Invalid("box_size must be positive".into()));
        }
        if self.player_speed < 0 {
            return Err(SettingsError::Invalid("player_speed cannot be negative".into()));
        }
        Ok(())
    }
}
