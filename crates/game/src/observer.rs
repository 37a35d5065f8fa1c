//! Sinks for the move log and the terminal signal.
//!
//! Observers run after the board has been updated. Their I/O failures are
//! logged and never reach the game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use draughts_core::Board;
use tracing::{info, warn};

use crate::record::{GameRecord, MoveLogEntry};
use crate::stats::GameStats;

pub trait GameObserver {
    fn on_move(&mut self, _entry: &MoveLogEntry, _board: &Board) {}

    /// Called once, with `record.result` set.
    fn on_game_over(&mut self, _record: &GameRecord) {}
}

/// Writes each finished game to `<dir>/game-<unix seconds>.json`.
pub struct RecordWriter {
    dir: PathBuf,
}

impl RecordWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for_now(&self) -> PathBuf {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut path = self.dir.join(format!("game-{secs}.json"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("game-{secs}-{n}.json"));
            n += 1;
        }
        path
    }
}

impl GameObserver for RecordWriter {
    fn on_game_over(&mut self, record: &GameRecord) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "cannot create record directory");
            return;
        }
        let path = self.path_for_now();
        match record.save(&path) {
            Ok(()) => info!(path = %path.display(), "game record written"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write game record"),
        }
    }
}

/// Adds each finished game to the stats file, from the human's perspective.
pub struct StatsObserver {
    path: PathBuf,
}

impl StatsObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GameObserver for StatsObserver {
    fn on_game_over(&mut self, record: &GameRecord) {
        let Some(signal) = record.result else {
            return;
        };
        let mut stats = match GameStats::load_or_default(&self.path) {
            Ok(stats) => stats,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "stats file unreadable, starting over");
                GameStats::default()
            }
        };
        stats.record(signal.result);
        if let Err(e) = stats.save(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to save stats");
        }
    }
}
