//! Turn state and its transition rules.

use draughts_core::{Color, Square};

use crate::record::TerminalSignal;

/// Consecutive king simple moves that end the game as a draw.
pub const DRAW_LIMIT: u32 = 25;
/// From this counter value on, a countdown notice is logged.
pub const DRAW_NOTICE_FROM: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination {
        from: Square,
        destinations: Vec<Square>,
    },
    /// A multi-capture is under way: `taken` holds the landings clicked so
    /// far, `destinations` the possible next landings.
    ContinuingCapture {
        from: Square,
        taken: Vec<Square>,
        destinations: Vec<Square>,
    },
    ComputerTurn,
    GameOver(TerminalSignal),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    pub side_to_move: Color,
    pub draw_counter: u32,
    pub phase: Phase,
}

impl TurnState {
    pub fn new(side_to_move: Color, draw_counter: u32, human: Color) -> Self {
        Self {
            side_to_move,
            draw_counter,
            phase: Self::waiting_phase(side_to_move, human),
        }
    }

    fn waiting_phase(side: Color, human: Color) -> Phase {
        if side == human {
            Phase::AwaitingSelection
        } else {
            Phase::ComputerTurn
        }
    }

    /// State after a move has been committed: counter updated, side flipped.
    pub fn after_commit(&self, is_capture: bool, king_moved: bool, human: Color) -> TurnState {
        let draw_counter = if !is_capture && king_moved {
            self.draw_counter + 1
        } else {
            0
        };
        let side_to_move = self.side_to_move.other();
        TurnState {
            side_to_move,
            draw_counter,
            phase: Self::waiting_phase(side_to_move, human),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_counter >= DRAW_LIMIT
    }

    /// Plies left before the draw, when the countdown is worth announcing.
    pub fn moves_to_draw(&self) -> Option<u32> {
        (DRAW_NOTICE_FROM..DRAW_LIMIT)
            .contains(&self.draw_counter)
            .then(|| DRAW_LIMIT - self.draw_counter)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
