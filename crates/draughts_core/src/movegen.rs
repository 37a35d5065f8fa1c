use crate::board::Board;
use crate::capture::{Branch, CaptureObligation};
use crate::error::{RulesError, RulesResult};
use crate::geometry::{step, walk, Direction};
use crate::types::{check_square, Color, Move, Square};

/// Non-capturing destinations of the piece on `from`.
/// Men step to an empty forward neighbour, kings slide in all four directions
/// until blocked.
pub fn simple_destinations(board: &Board, from: Square) -> RulesResult<Vec<Square>> {
    let from = check_square(from)?;
    let piece = board.occupant_at(from).ok_or(RulesError::EmptySquare(from))?;
    let mut out = Vec::new();
    if piece.is_king() {
        for dir in Direction::ALL {
            out.extend(walk(from, dir).take_while(|&sq| board.is_empty(sq)));
        }
    } else {
        for dir in piece.color.forward() {
            if let Some(sq) = step(from, dir).filter(|&sq| board.is_empty(sq)) {
                out.push(sq);
            }
        }
    }
    Ok(out)
}

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, color: Color) -> RulesResult<Vec<Move>> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, color, &mut out)?;
    Ok(out)
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// When any capture exists only the longest ones are produced.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) -> RulesResult<()> {
    out.clear();
    let obligation = CaptureObligation::analyze(board, color)?;
    if obligation.is_mandatory() {
        out.extend(obligation.moves());
        return Ok(());
    }
    for &from in board.squares_of(color) {
        for to in simple_destinations(board, from)? {
            out.push(Move::simple(from, to));
        }
    }
    Ok(())
}

/// Branches whose first landings equal `taken`.
pub fn matching_branches<'a>(
    branches: &'a [Branch],
    taken: &'a [Square],
) -> impl Iterator<Item = &'a Branch> + 'a {
    branches
        .iter()
        .filter(move |b| b.len() > taken.len() && b.landings.starts_with(taken))
}

/// Next landing squares after the steps in `taken`, first-seen order, no
/// duplicates.
pub fn next_capture_steps(branches: &[Branch], taken: &[Square]) -> Vec<Square> {
    let mut out: Vec<Square> = Vec::new();
    for branch in matching_branches(branches, taken) {
        let sq = branch.landings[taken.len()];
        if !out.contains(&sq) {
            out.push(sq);
        }
    }
    out
}

/// Destinations offered when the piece on `from` is selected.
///
/// Under a capture obligation this is the first landing of each surviving
/// branch of that piece (empty if the piece has none); otherwise the simple
/// destinations. A square not holding one of `obligation.color`'s pieces has
/// no destinations.
pub fn destinations_for(
    obligation: &CaptureObligation,
    board: &Board,
    from: Square,
) -> RulesResult<Vec<Square>> {
    match board.occupant_at(from) {
        Some(piece) if piece.color == obligation.color => {}
        _ => return Ok(Vec::new()),
    }
    if obligation.is_mandatory() {
        Ok(obligation
            .tree_for(from)
            .map(|tree| next_capture_steps(&tree.branches, &[]))
            .unwrap_or_default())
    } else {
        simple_destinations(board, from)
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
