//! Pre-computed diagonal tables for the 10×10 board.
//!
//! Every playable square lies on exactly one rising diagonal (bottom-left to
//! top-right) and one falling diagonal (top-left to bottom-right). Both rays
//! are stored edge to edge, ordered by ascending row, together with the
//! square's index inside each ray. The tables are built at compile time and
//! shared read-only by move generation, capture analysis and search.

use crate::types::{col_of, row_of, square_at, Square, BOARD_SIZE, NUM_SQUARES};

/// Longest diagonal on the board (5 → 46).
pub const MAX_RAY_LEN: usize = BOARD_SIZE as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
}

/// One full diagonal, edge to edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    squares: [Square; MAX_RAY_LEN],
    len: u8,
}

impl Ray {
    const EMPTY: Ray = Ray {
        squares: [0; MAX_RAY_LEN],
        len: 0,
    };

    #[inline(always)]
    pub fn squares(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Both diagonals through one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagonals {
    pub rising: Ray,
    pub falling: Ray,
    pub rising_index: u8,
    pub falling_index: u8,
}

impl Diagonals {
    const EMPTY: Diagonals = Diagonals {
        rising: Ray::EMPTY,
        falling: Ray::EMPTY,
        rising_index: 0,
        falling_index: 0,
    };
}

/// Builds the ray through `sq` whose top end lies in column direction
/// `top_dcol` (+1 for the rising diagonal, -1 for the falling one).
const fn ray_through(sq: Square, top_dcol: i8) -> (Ray, u8) {
    let mut row = row_of(sq) as i8;
    let mut col = col_of(sq) as i8;
    while row > 0 && col + top_dcol >= 0 && col + top_dcol < BOARD_SIZE as i8 {
        row -= 1;
        col += top_dcol;
    }

    let mut ray = Ray::EMPTY;
    let mut index = 0u8;
    while let Some(s) = square_at(row, col) {
        if s == sq {
            index = ray.len;
        }
        ray.squares[ray.len as usize] = s;
        ray.len += 1;
        row += 1;
        col -= top_dcol;
    }
    (ray, index)
}

/// Diagonal table for every square, indexed by `square - 1`.
pub static DIAGONALS: [Diagonals; NUM_SQUARES] = {
    let mut table = [Diagonals::EMPTY; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        let sq = (i + 1) as Square;
        let (rising, rising_index) = ray_through(sq, 1);
        let (falling, falling_index) = ray_through(sq, -1);
        table[i] = Diagonals {
            rising,
            falling,
            rising_index,
            falling_index,
        };
        i += 1;
    }
    table
};

/// Both rays through `sq` and the square's index in each.
#[inline(always)]
pub fn diagonals_through(sq: Square) -> &'static Diagonals {
    &DIAGONALS[sq as usize - 1]
}

/// Squares beyond `sq` in `dir`, nearest first, up to the board edge.
pub fn walk(sq: Square, dir: Direction) -> Walk {
    let diagonals = diagonals_through(sq);
    let (ray, index) = match dir {
        Direction::UpRight | Direction::DownLeft => (&diagonals.rising, diagonals.rising_index),
        Direction::UpLeft | Direction::DownRight => (&diagonals.falling, diagonals.falling_index),
    };
    // Rays are ordered top to bottom, so "up" walks towards index 0.
    let step = match dir {
        Direction::UpLeft | Direction::UpRight => -1,
        Direction::DownLeft | Direction::DownRight => 1,
    };
    Walk {
        ray,
        next: index as i8 + step,
        step,
    }
}

/// The immediate diagonal neighbour of `sq` in `dir`.
#[inline(always)]
pub fn step(sq: Square, dir: Direction) -> Option<Square> {
    walk(sq, dir).next()
}

/// Iterator produced by [`walk`].
#[derive(Clone, Debug)]
pub struct Walk {
    ray: &'static Ray,
    next: i8,
    step: i8,
}

impl Iterator for Walk {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < 0 || self.next as usize >= self.ray.len() {
            return None;
        }
        let sq = self.ray.squares()[self.next as usize];
        self.next += self.step;
        Some(sq)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
