//! Compact set of playable squares.
//!
//! Bit `n - 1` represents square `n`, so the 50 playable squares fit in the
//! low bits of a `u64`. The set is `Copy`, which lets capture-tree branches
//! carry their own captured set down the recursion without sharing.

use crate::types::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << (sq - 1))
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << (sq - 1))) != 0
    }

    /// Copy of the set with `sq` added.
    #[inline(always)]
    pub const fn with(self, sq: Square) -> Self {
        SquareSet(self.0 | (1u64 << (sq - 1)))
    }

    #[inline(always)]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << (sq - 1);
    }

    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Lowest square in the set, removed from it.
    #[inline(always)]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as Square + 1;
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }
}

/// Iterates squares in ascending order.
impl Iterator for SquareSet {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lowest()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

#[cfg(test)]
#[path = "squareset_tests.rs"]
mod squareset_tests;
