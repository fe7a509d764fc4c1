//! Best score per difficulty and the plain-text file that keeps it.
//!
//! The file holds one integer per line in Easy, Medium, Hard order. Missing
//! lines read as zero, and so do lines that are not a number.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::difficulty::Difficulty;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    scores: [u32; 3],
}

impl HighScoreTable {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores[difficulty.index()]
    }

    /// Keeps `score` if it beats the stored best. Returns true on a new record.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let best = &mut self.scores[difficulty.index()];
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }

    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for (slot, token) in table.scores.iter_mut().zip(text.split_whitespace()) {
            *slot = token.parse().unwrap_or(0);
        }
        table
    }

    pub fn to_text(&self) -> String {
        self.scores.iter().map(|s| format!("{s}\n")).collect()
    }
}

pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> HighScoreTable {
        match fs::read_to_string(&self.path) {
            Ok(text) => HighScoreTable::parse(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                HighScoreTable::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read high scores");
                HighScoreTable::default()
            }
        }
    }

    pub fn save(&self, table: &HighScoreTable) -> Result<()> {
        fs::write(&self.path, table.to_text())
            .with_context(|| format!("writing high scores to {}", self.path.display()))
    }
}
