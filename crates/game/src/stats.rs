//! Lifetime game counters kept in a small JSON file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::PersistError;
use crate::record::GameResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
}

impl GameStats {
    pub fn record(&mut self, result: GameResult) {
        self.played += 1;
        match result {
            GameResult::Win => self.won += 1,
            GameResult::Draw => self.drawn += 1,
            GameResult::Loss => self.lost += 1,
        }
    }

    /// Score from the human's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        (self.won as f64 + 0.5 * self.drawn as f64) / self.played as f64
    }

    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like [`GameStats::load`], but a missing file yields empty stats.
    pub fn load_or_default(path: &Path) -> Result<Self, PersistError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Played: {}", self.played)?;
        writeln!(f, "Won:    {}", self.won)?;
        writeln!(f, "Drawn:  {}", self.drawn)?;
        writeln!(f, "Lost:   {}", self.lost)?;
        write!(f, "Score:  {:.1}%", self.score() * 100.0)
    }
}
