use std::path::PathBuf;

use draughts_core::{Color, RulesError};

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("the game is already over")]
    GameOver,

    #[error("it is the computer's turn")]
    NotHumanTurn,

    #[error("it is the human's turn")]
    NotComputerTurn,

    /// The side to move is blocked. Not a loss; the caller decides.
    #[error("{0} has no legal move")]
    NoLegalMoves(Color),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure writing or reading a record or stats file.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] RulesError),
}
