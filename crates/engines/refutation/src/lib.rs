//! Refutation Engine
//!
//! Picks a move for the computer side with a one-ply lookahead:
//! - every legal move is played on its own copy of the board
//! - moves after which the opponent can capture are discarded
//! - if every move is refuted, the ones allowing the shortest reply capture are kept
//! - the final choice is uniformly random among the survivors

mod search;

use draughts_core::{Board, Color, Engine, RulesError, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

pub use search::{evaluate_candidates, select_candidates, Candidate};

#[cfg(test)]
mod lib_tests;

#[derive(Debug, Clone)]
pub struct RefutationEngine {
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for RefutationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RefutationEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RefutationEngine {
    fn search(&mut self, board: &Board, side: Color) -> Result<SearchResult, RulesError> {
        self.nodes = 0;

        let candidates = evaluate_candidates(board, side, &mut self.nodes)?;
        let kept = select_candidates(&candidates);
        let refuted = candidates.iter().filter(|c| c.reply.is_some()).count();
        let chosen = kept.choose(&mut self.rng).copied();

        debug!(
            %side,
            candidates = candidates.len(),
            refuted,
            kept = kept.len(),
            chosen = ?chosen.map(|c| c.mv.to_string()),
            "refutation search"
        );

        Ok(SearchResult {
            best_move: chosen.map(|c| c.mv.clone()),
            candidates: candidates.len(),
            refuted,
            reply_capture: chosen.and_then(|c| c.reply).unwrap_or(0),
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Refutation v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
