//! Move notation in the `32-28` / `19(D)x30x44` / `14x5=D` style.

use crate::board::{Board, SNAPSHOT_DELIMITER};
use crate::error::{RulesError, RulesResult};
use crate::movegen::legal_moves;
use crate::types::{check_square, Color, Move, Piece, Square};

pub const KING_MARK: &str = "(D)";
pub const PROMOTION_MARK: &str = "=D";

/// Starting square, suffixed `(D)` when the mover is a king.
pub fn from_token(from: Square, piece: Piece) -> String {
    if piece.is_king() {
        format!("{from}{KING_MARK}")
    } else {
        from.to_string()
    }
}

pub fn format_move(from_token: &str, is_capture: bool, destinations: &[Square], promoted: bool) -> String {
    let sep = if is_capture { 'x' } else { '-' };
    let mut s = String::from(from_token);
    for sq in destinations {
        s.push(sep);
        s.push_str(&sq.to_string());
    }
    if promoted {
        s.push_str(PROMOTION_MARK);
    }
    s
}

pub fn move_to_notation(mv: &Move, piece: Piece, promoted: bool) -> String {
    format_move(&from_token(mv.from, piece), mv.is_capture(), &mv.path, promoted)
}

pub fn parse_square(txt: &str) -> RulesResult<Square> {
    let raw: u8 = txt
        .trim()
        .parse()
        .map_err(|_| RulesError::IllegalMove(format!("not a square: {txt:?}")))?;
    check_square(raw)
}

/// Squares named in a notation string, marks stripped.
pub fn parse_squares(txt: &str) -> RulesResult<Vec<Square>> {
    txt.replace(KING_MARK, "")
        .replace(PROMOTION_MARK, "")
        .split(|c: char| c == '-' || c == 'x' || c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_square)
        .collect()
}

/// Parses a notation string and matches it against the legal moves so the
/// captured squares are filled in. A capture may be written with only its
/// first and last squares when that is unambiguous.
pub fn parse_move(board: &Board, color: Color, txt: &str) -> RulesResult<Option<Move>> {
    let squares = parse_squares(txt)?;
    let Some((&from, rest)) = squares.split_first() else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Ok(None);
    }

    let legals = legal_moves(board, color)?;
    if let Some(mv) = legals.iter().find(|m| m.from == from && m.path == rest) {
        return Ok(Some(mv.clone()));
    }

    let mut short = legals
        .into_iter()
        .filter(|m| rest.len() == 1 && m.from == from && m.to() == rest[0]);
    match (short.next(), short.next()) {
        (Some(mv), None) => Ok(Some(mv)),
        _ => Ok(None),
    }
}

/// Concatenated snapshot tokens, each followed by the delimiter.
pub fn snapshot_log<'a>(boards: impl IntoIterator<Item = &'a Board>) -> String {
    let mut log = String::new();
    for board in boards {
        log.push_str(&board.snapshot());
        log.push(SNAPSHOT_DELIMITER);
    }
    log
}

/// Splits a concatenated snapshot log back into boards.
pub fn parse_snapshot_log(log: &str) -> RulesResult<Vec<Board>> {
    log.split(SNAPSHOT_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(Board::from_snapshot)
        .collect()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
