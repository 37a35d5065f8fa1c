//! Error types for the rules core.

use crate::types::Square;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A raw identifier outside 1..=50.
    #[error("square {0} is outside 1..=50")]
    InvalidSquare(u8),

    #[error("square {0} is empty")]
    EmptySquare(Square),

    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The occupant map and the piece collections disagree, or analysis
    /// reached a square with no piece on it. Always a bug, never user input.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),
}

pub type RulesResult<T> = Result<T, RulesError>;
