//! Turn handling for a human playing the computer.
//!
//! [`Game`] owns the board, accepts square clicks for the human side, asks an
//! [`draughts_core::Engine`] for the computer's moves, and emits a
//! [`MoveLogEntry`] per move and one [`TerminalSignal`] per game.

pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod record;
pub mod stats;
pub mod turn;

pub use config::GameConfig;
pub use controller::{ClickOutcome, Committed, Game};
pub use error::{ConfigError, GameError, PersistError};
pub use observer::{GameObserver, RecordWriter, StatsObserver};
pub use record::{GameRecord, GameResult, MoveLogEntry, TerminalSignal};
pub use stats::GameStats;
pub use turn::{Phase, TurnState, DRAW_LIMIT};
