//! Game settings and preferences
//!
//! Loaded from a JSON file next to the game. Missing fields take their
//! defaults, and a missing or corrupt file falls back to defaults entirely.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SessionConfig;

/// On-screen pause button, in pixels, horizontally centered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauseButton {
    /// Distance from the top of the window
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PauseButton {
    fn default() -> Self {
        Self {
            y: 20.0,
            width: 60.0,
            height: 60.0,
        }
    }
}

impl PauseButton {
    /// Top-left and bottom-right corners for a window of the given width
    pub fn bounds(&self, window_width: f32) -> (Vec2, Vec2) {
        let left = (window_width - self.width) / 2.0;
        (
            Vec2::new(left, self.y),
            Vec2::new(left + self.width, self.y + self.height),
        )
    }

    /// Whether a pixel position lands on the button (edges inclusive)
    pub fn contains(&self, pos: Vec2, window_width: f32) -> bool {
        let (min, max) = self.bounds(window_width);
        min.x <= pos.x && pos.x <= max.x && min.y <= pos.y && pos.y <= max.y
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay rules
    pub session: SessionConfig,
    /// Fixed RNG seed (None = pick one at startup)
    pub seed: Option<u64>,

    // === HUD ===
    pub pause_button: PauseButton,
    /// Level/score/lives text
    pub hud_font_size: f32,
    /// "Paused", "Game Over" and title headings
    pub title_font_size: f32,
    /// Final score on the game-over screen
    pub score_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            seed: None,
            pause_button: PauseButton::default(),
            hud_font_size: 24.0,
            title_font_size: 60.0,
            score_font_size: 48.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON. Failures are logged, not fatal.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
