use std::fmt;

use crate::error::{RulesError, RulesResult};
use crate::types::*;

/// Terminator written after every snapshot in a concatenated snapshot log.
pub const SNAPSHOT_DELIMITER: char = '#';

/// Occupant map plus the two live piece collections.
///
/// The collections hold squares in creation order; a move rewrites the entry
/// in place and a capture removes it, so order is stable for the lifetime of
/// a game. The board is a plain value: look-ahead clones it instead of
/// mutating and rolling back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    pieces: [Vec<Square>; 2],
}

/// What applying a move did besides relocating the mover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    pub moved: Piece,
    pub captured: Vec<Piece>,
    pub promoted: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            pieces: [
                Vec::with_capacity(PIECES_PER_SIDE),
                Vec::with_capacity(PIECES_PER_SIDE),
            ],
        }
    }

    /// Brown men on 1–20, white men on 31–50.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for i in 0..PIECES_PER_SIDE as u8 {
            board.squares[(NUM_SQUARES as u8 - i - 1) as usize] = Some(Piece::man(Color::White));
            board.pieces[Color::White.idx()].push(NUM_SQUARES as u8 - i);
            board.squares[i as usize] = Some(Piece::man(Color::Brown));
            board.pieces[Color::Brown.idx()].push(i + 1);
        }
        board
    }

    /// Parses a 50-character snapshot token (see [`Board::snapshot`]).
    /// A trailing [`SNAPSHOT_DELIMITER`] is accepted.
    pub fn from_snapshot(token: &str) -> RulesResult<Self> {
        let token = token.strip_suffix(SNAPSHOT_DELIMITER).unwrap_or(token);
        let count = token.chars().count();
        if count != NUM_SQUARES {
            return Err(RulesError::InvalidSnapshot(format!(
                "expected {NUM_SQUARES} squares, got {count}"
            )));
        }

        let mut board = Board::empty();
        for (i, ch) in token.chars().enumerate() {
            let occupant = Piece::from_symbol(ch).ok_or_else(|| {
                RulesError::InvalidSnapshot(format!("unknown symbol {ch:?} at square {}", i + 1))
            })?;
            if let Some(piece) = occupant {
                board.place(i as Square + 1, piece)?;
            }
        }
        Ok(board)
    }

    /// One character per square in row-major order: `0` empty, `1` white man,
    /// `2` white king, `-` brown man, `=` brown king.
    pub fn snapshot(&self) -> String {
        self.squares
            .iter()
            .map(|occ| occ.map_or('0', Piece::symbol))
            .collect()
    }

    #[inline(always)]
    pub fn occupant_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize - 1]
    }

    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq as usize - 1].is_none()
    }

    /// Squares of `color`'s pieces in collection order.
    pub fn squares_of(&self, color: Color) -> &[Square] {
        &self.pieces[color.idx()]
    }

    /// `color`'s pieces with their squares, in collection order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces[color.idx()].iter().filter_map(move |&sq| {
            self.occupant_at(sq).map(|piece| (sq, piece))
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces[color.idx()].len()
    }

    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|occ| occ.is_none()).count()
    }

    pub fn place(&mut self, sq: Square, piece: Piece) -> RulesResult<()> {
        let sq = check_square(sq)?;
        if self.occupant_at(sq).is_some() {
            return Err(RulesError::Occupied(sq));
        }
        self.squares[sq as usize - 1] = Some(piece);
        self.pieces[piece.color.idx()].push(sq);
        Ok(())
    }

    pub fn remove(&mut self, sq: Square) -> RulesResult<Piece> {
        let sq = check_square(sq)?;
        let piece = self.occupant_at(sq).ok_or(RulesError::EmptySquare(sq))?;
        self.squares[sq as usize - 1] = None;
        let list = &mut self.pieces[piece.color.idx()];
        let pos = list.iter().position(|&s| s == sq).ok_or_else(|| {
            RulesError::InvariantViolation(format!("{sq} occupied but missing from collection"))
        })?;
        list.remove(pos);
        Ok(piece)
    }

    /// Relocates the piece on `from` to the empty square `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> RulesResult<Piece> {
        let from = check_square(from)?;
        let to = check_square(to)?;
        let piece = self.occupant_at(from).ok_or(RulesError::EmptySquare(from))?;
        if from == to {
            return Ok(piece);
        }
        if self.occupant_at(to).is_some() {
            return Err(RulesError::Occupied(to));
        }
        self.squares[from as usize - 1] = None;
        self.squares[to as usize - 1] = Some(piece);
        let entry = self.pieces[piece.color.idx()]
            .iter_mut()
            .find(|s| **s == from)
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("{from} occupied but missing from collection"))
            })?;
        *entry = to;
        Ok(piece)
    }

    /// Crowns the man on `sq`. Returns `false` if it already was a king.
    pub fn promote(&mut self, sq: Square) -> RulesResult<bool> {
        let sq = check_square(sq)?;
        let slot = &mut self.squares[sq as usize - 1];
        match slot {
            Some(piece) if piece.rank == Rank::Man => {
                piece.rank = Rank::King;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(RulesError::EmptySquare(sq)),
        }
    }

    /// Crowns the piece on `sq` if it is a man standing on its far row.
    /// Call only once the whole move has finished.
    pub fn promote_if_on_far_row(&mut self, sq: Square) -> RulesResult<bool> {
        let sq = check_square(sq)?;
        let piece = self.occupant_at(sq).ok_or(RulesError::EmptySquare(sq))?;
        if piece.rank == Rank::Man && row_of(sq) == piece.color.promotion_row() {
            self.promote(sq)
        } else {
            Ok(false)
        }
    }

    /// Plays a whole move: relocate, remove captured pieces, then promote if
    /// the move ended on the far row. On error the board may be partly
    /// updated; [`Board::play`] leaves the original intact.
    pub fn apply(&mut self, mv: &Move) -> RulesResult<MoveEffect> {
        check_square(mv.from)?;
        let moved = self.occupant_at(mv.from).ok_or(RulesError::EmptySquare(mv.from))?;
        let to = mv.to();
        self.move_piece(mv.from, to)?;

        let mut captured = Vec::with_capacity(mv.captured.len());
        for &sq in &mv.captured {
            let piece = self.remove(sq)?;
            if piece.color == moved.color {
                return Err(RulesError::IllegalMove(format!(
                    "{mv} captures own piece on {sq}"
                )));
            }
            captured.push(piece);
        }

        let promoted = self.promote_if_on_far_row(to)?;
        Ok(MoveEffect {
            moved,
            captured,
            promoted,
        })
    }

    /// The board after `mv`, leaving `self` untouched.
    pub fn play(&self, mv: &Move) -> RulesResult<Board> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// Checks that the occupant map and both collections agree.
    pub fn validate(&self) -> RulesResult<()> {
        for color in Color::ALL {
            let mut seen = crate::squareset::SquareSet::EMPTY;
            for &sq in &self.pieces[color.idx()] {
                if seen.contains(sq) {
                    return Err(RulesError::InvariantViolation(format!(
                        "{color} collection lists {sq} twice"
                    )));
                }
                seen.insert(sq);
                match self.occupant_at(sq) {
                    Some(piece) if piece.color == color => {}
                    other => {
                        return Err(RulesError::InvariantViolation(format!(
                            "{color} collection lists {sq} but the square holds {other:?}"
                        )))
                    }
                }
            }
        }
        let occupied = NUM_SQUARES - self.empty_count();
        let listed = self.count(Color::White) + self.count(Color::Brown);
        if occupied != listed {
            return Err(RulesError::InvariantViolation(format!(
                "{occupied} occupied squares but {listed} pieces in collections"
            )));
        }
        Ok(())
    }
}

/// Text diagram, brown at the top. Men are `w`/`b`, kings `W`/`B`,
/// empty playable squares `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as i8 {
            let mut line = String::with_capacity(2 * BOARD_SIZE as usize + 8);
            for col in 0..BOARD_SIZE as i8 {
                let ch = match square_at(row, col) {
                    None => ' ',
                    Some(sq) => match self.occupant_at(sq) {
                        None => '.',
                        Some(p) => match (p.color, p.rank) {
                            (Color::White, Rank::Man) => 'w',
                            (Color::White, Rank::King) => 'W',
                            (Color::Brown, Rank::Man) => 'b',
                            (Color::Brown, Rank::King) => 'B',
                        },
                    },
                };
                line.push(ch);
                line.push(' ');
            }
            let first = row as u8 * SQUARES_PER_ROW + 1;
            writeln!(f, "{line}  {first:>2}-{:>2}", first + SQUARES_PER_ROW - 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
