//! Move log entries, terminal signal and the per-game record handed to
//! persistence.

use serde::{Deserialize, Serialize};
use std::path::Path;

use draughts_core::{format_move, parse_snapshot_log, Board, Color, Square, SNAPSHOT_DELIMITER};

use crate::error::PersistError;

/// One committed move as shown to the player and stored in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub mover: Color,
    /// Starting square, `(D)` appended for a king.
    pub from_token: String,
    pub is_capture: bool,
    pub promoted: bool,
    pub destinations: Vec<Square>,
}

impl MoveLogEntry {
    pub fn notation(&self) -> String {
        format_move(&self.from_token, self.is_capture, &self.destinations, self.promoted)
    }
}

/// Result of a single game from the human's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TerminalSignal {
    pub result: GameResult,
    /// `None` for a draw.
    pub winner: Option<Color>,
}

impl TerminalSignal {
    pub fn new(winner: Option<Color>, human: Color) -> Self {
        let result = match winner {
            None => GameResult::Draw,
            Some(c) if c == human => GameResult::Win,
            Some(_) => GameResult::Loss,
        };
        Self { result, winner }
    }
}

/// Everything needed to persist or replay one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub human: Color,
    /// White's moves in notation, each followed by `#`.
    pub white_moves: String,
    pub brown_moves: String,
    /// Snapshot of the initial board and of the board after every move,
    /// each followed by `#`.
    pub board_states: String,
    pub entries: Vec<MoveLogEntry>,
    pub result: Option<TerminalSignal>,
}

impl GameRecord {
    pub fn new(initial: &Board, human: Color) -> Self {
        let mut board_states = initial.snapshot();
        board_states.push(SNAPSHOT_DELIMITER);
        Self {
            human,
            white_moves: String::new(),
            brown_moves: String::new(),
            board_states,
            entries: Vec::new(),
            result: None,
        }
    }

    pub fn push(&mut self, entry: MoveLogEntry, after: &Board) {
        let moves = match entry.mover {
            Color::White => &mut self.white_moves,
            Color::Brown => &mut self.brown_moves,
        };
        moves.push_str(&entry.notation());
        moves.push(SNAPSHOT_DELIMITER);
        self.board_states.push_str(&after.snapshot());
        self.board_states.push(SNAPSHOT_DELIMITER);
        self.entries.push(entry);
    }

    /// Boards for replay, initial position first.
    pub fn boards(&self) -> Result<Vec<Board>, PersistError> {
        Ok(parse_snapshot_log(&self.board_states)?)
    }

    /// Save record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load record from a JSON file
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
