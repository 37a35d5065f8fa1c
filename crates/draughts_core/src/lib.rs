pub mod board;
pub mod capture;
pub mod error;
pub mod geometry;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod squareset;
pub mod types;

// Re-export core rules (not engine-specific)
pub use board::*;
pub use capture::*;
pub use error::*;
pub use geometry::{diagonals_through, step, walk, Diagonals, Direction, Ray};
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use squareset::SquareSet;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every computer player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The chosen move (None if the side has no legal move)
    pub best_move: Option<Move>,
    /// Number of candidate moves examined
    pub candidates: usize,
    /// Candidates after which the opponent could capture
    pub refuted: usize,
    /// Longest opponent capture allowed by the chosen move (0 if none)
    pub reply_capture: usize,
    /// Boards generated during the search (optional, for stats)
    pub nodes: u64,
}

/// Trait that all draughts engines must implement.
///
/// The controller only talks to this trait, so a different computer player
/// can be dropped in without touching turn handling.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// # Returns
    /// SearchResult with the chosen move and statistics. Errors only on a
    /// broken board invariant.
    fn search(&mut self, board: &Board, side: Color) -> Result<SearchResult, RulesError>;

    /// Returns the engine's name for logs and game records
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
