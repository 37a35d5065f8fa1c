use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RulesError;
use crate::geometry::Direction;

/// Playable square identity, 1..=50, row-major over the dark cells.
pub type Square = u8;

pub const NUM_SQUARES: usize = 50;
pub const BOARD_SIZE: u8 = 10;
pub const SQUARES_PER_ROW: u8 = 5;
pub const PIECES_PER_SIDE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Brown,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Brown];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Brown,
            Color::Brown => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Brown => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Brown => BOARD_SIZE - 1,
        }
    }

    /// The two directions a man of this color steps in without capturing.
    pub fn forward(self) -> [Direction; 2] {
        match self {
            Color::White => [Direction::UpLeft, Direction::UpRight],
            Color::Brown => [Direction::DownLeft, Direction::DownRight],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Brown => write!(f, "brown"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Symbol used in board snapshot tokens.
    pub fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => '1',
            (Color::White, Rank::King) => '2',
            (Color::Brown, Rank::Man) => '-',
            (Color::Brown, Rank::King) => '=',
        }
    }

    /// Inverse of [`Piece::symbol`]. `'0'` (an empty square) yields `None`.
    pub fn from_symbol(ch: char) -> Option<Option<Piece>> {
        match ch {
            '0' => Some(None),
            '1' => Some(Some(Piece::man(Color::White))),
            '2' => Some(Some(Piece::king(Color::White))),
            '-' => Some(Some(Piece::man(Color::Brown))),
            '=' => Some(Some(Piece::king(Color::Brown))),
            _ => None,
        }
    }
}

/// A complete move for one side: the starting square, every landing square
/// in order, and the squares of the pieces captured on the way (empty for a
/// simple move).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub path: Vec<Square>,
    pub captured: Vec<Square>,
}

impl Move {
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            from,
            path: vec![to],
            captured: Vec::new(),
        }
    }

    pub fn capture(from: Square, path: Vec<Square>, captured: Vec<Square>) -> Self {
        debug_assert_eq!(path.len(), captured.len());
        Self {
            from,
            path,
            captured,
        }
    }

    /// Final landing square.
    pub fn to(&self) -> Square {
        self.path.last().copied().unwrap_or(self.from)
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for sq in &self.path {
            write!(f, "{sep}{sq}")?;
        }
        Ok(())
    }
}

// Helpers
pub const fn is_valid_square(sq: Square) -> bool {
    sq >= 1 && sq as usize <= NUM_SQUARES
}

/// Validates a raw square identifier coming from outside the engine.
pub fn check_square(raw: u8) -> Result<Square, RulesError> {
    if is_valid_square(raw) {
        Ok(raw)
    } else {
        Err(RulesError::InvalidSquare(raw))
    }
}

pub const fn row_of(sq: Square) -> u8 {
    (sq - 1) / SQUARES_PER_ROW
}

pub const fn col_of(sq: Square) -> u8 {
    let offset = 2 * ((sq - 1) % SQUARES_PER_ROW);
    if row_of(sq) % 2 == 0 {
        offset + 1
    } else {
        offset
    }
}

/// Square at a board coordinate, or `None` for light cells and off-board
/// coordinates.
pub const fn square_at(row: i8, col: i8) -> Option<Square> {
    if row < 0 || col < 0 || row >= BOARD_SIZE as i8 || col >= BOARD_SIZE as i8 {
        return None;
    }
    if (row + col) % 2 == 0 {
        return None;
    }
    Some(row as u8 * SQUARES_PER_ROW + col as u8 / 2 + 1)
}
