//! Game settings
//!
//! Persisted as JSON next to the binary. A missing or broken file falls back
//! to defaults so the game always starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::state::CameraMode;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Ghost speed multiplier
    pub fn ghost_speed_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Cherry freeze multiplier
    pub fn freeze_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.6,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Camera mode at level start
    pub camera_mode: CameraMode,

    // === Player ===
    pub player_speed: f32,
    /// Speed while a cherry boost is active
    pub boost_speed: f32,
    /// Seconds a cherry boost lasts
    pub boost_duration: f32,
    /// Added to the player's render size for its collision sphere
    pub collision_margin: f32,
    /// Fly the player in along the intro curve at level start
    pub intro: bool,

    // === Ghosts ===
    pub ghost_speed: f32,
    /// Freeze countdown set when a cherry is eaten
    pub freeze_countdown: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            camera_mode: CameraMode::LookAt,

            player_speed: PLAYER_SPEED,
            boost_speed: PLAYER_BOOST_SPEED,
            boost_duration: SPEED_BOOST_DURATION,
            collision_margin: COLLISION_MARGIN,
            intro: true,

            ghost_speed: GHOST_SPEED,
            freeze_countdown: GHOST_FREEZE_COUNTDOWN,
        }
    }
}

impl Settings {
    /// Default settings at a given difficulty
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Ghost speed after the difficulty multiplier
    pub fn effective_ghost_speed(&self) -> f32 {
        self.ghost_speed * self.difficulty.ghost_speed_scale()
    }

    /// Freeze countdown after the difficulty multiplier
    pub fn effective_freeze_countdown(&self) -> f32 {
        self.freeze_countdown * self.difficulty.freeze_scale()
    }

    /// Default settings file name
    pub const FILE_NAME: &'static str = "pac_maze_settings.json";

    /// Load settings, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_names() {
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_name(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("nightmare"), None);
    }

    #[test]
    fn test_normal_matches_constants() {
        let settings = Settings::default();
        assert_eq!(settings.effective_ghost_speed(), GHOST_SPEED);
        assert_eq!(settings.effective_freeze_countdown(), GHOST_FREEZE_COUNTDOWN);
    }

    #[test]
    fn test_hard_is_faster() {
        let settings = Settings::from_difficulty(Difficulty::Hard);
        assert!(settings.effective_ghost_speed() > GHOST_SPEED);
        assert!(settings.effective_freeze_countdown() < GHOST_FREEZE_COUNTDOWN);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"Easy"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.player_speed, PLAYER_SPEED);
        assert!(settings.intro);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("pac_maze_settings_{}.json", std::process::id()));
        let mut settings = Settings::from_difficulty(Difficulty::Hard);
        settings.camera_mode = CameraMode::FreeCam;
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/pac_maze_settings.json");
        assert!(matches!(Settings::load_from(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load(path), Settings::default());
    }
}
