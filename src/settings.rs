use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::difficulty::Difficulty;

pub const SETTINGS_FILE: &str = "snake_settings.json";

// Persistent settings; any missing field falls back to its default
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_volume: f32,
    pub high_score_file: PathBuf,
    pub font_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            sound_volume: 1.0,
            high_score_file: PathBuf::from("highscores.txt"),
            font_file: PathBuf::from("Poppins-Bold.ttf"),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Settings {
        if !path.exists() {
            return Settings::default();
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read settings, using defaults");
                return Settings::default();
            }
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(mut settings) => {
                settings.sound_volume = settings.sound_volume.clamp(0.0, 1.0);
                settings
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "invalid settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("encoding settings")?;
        fs::write(path, text).with_context(|| format!("writing settings to {}", path.display()))
    }
}
