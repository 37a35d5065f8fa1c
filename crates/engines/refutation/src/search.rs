use draughts_core::{legal_moves, Board, CaptureObligation, Color, Move, RulesResult};

/// A legal move together with the opponent's best capture in reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    /// Length of the opponent's longest capture after `mv`, `None` if the
    /// opponent has no capture.
    pub reply: Option<usize>,
}

impl Candidate {
    pub fn is_refuted(&self) -> bool {
        self.reply.is_some()
    }
}

/// Plays every legal move of `side` on its own board copy and records the
/// opponent's capture obligation afterwards.
pub fn evaluate_candidates(board: &Board, side: Color, nodes: &mut u64) -> RulesResult<Vec<Candidate>> {
    let moves = legal_moves(board, side)?;
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let next = board.play(&mv)?;
        *nodes += 1;
        let reply = CaptureObligation::analyze(&next, side.other())?;
        out.push(Candidate {
            mv,
            reply: reply.is_mandatory().then_some(reply.longest),
        });
    }
    Ok(out)
}

/// The candidates a choice may be drawn from: the unrefuted ones, or if every
/// candidate is refuted, those allowing the shortest reply.
pub fn select_candidates(candidates: &[Candidate]) -> Vec<&Candidate> {
    let safe: Vec<&Candidate> = candidates.iter().filter(|c| !c.is_refuted()).collect();
    if !safe.is_empty() {
        return safe;
    }
    let Some(min) = candidates.iter().filter_map(|c| c.reply).min() else {
        return Vec::new();
    };
    candidates.iter().filter(|c| c.reply == Some(min)).collect()
}
