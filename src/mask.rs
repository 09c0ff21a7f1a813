//! A 10×10 cell mask packed into a `u128`.
//!
//! Board layers (ships, hits, misses, sunk) are each one mask, which keeps
//! `Board` a small `Copy` value. Bit `row * 10 + col` represents a cell.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use crate::common::Position;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;
const CELLS: usize = N * N;

/// Set of cells on the grid.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMask {
    bits: u128,
}

impl CellMask {
    /// No cells.
    pub const EMPTY: CellMask = CellMask { bits: 0 };

    /// Every cell on the grid.
    pub const FULL: CellMask = CellMask {
        bits: (1u128 << CELLS) - 1,
    };

    /// Cells where `row + col` is even.
    pub const EVEN_PARITY: CellMask = CellMask {
        bits: even_parity_bits(),
    };

    #[inline]
    fn bit(pos: Position) -> u128 {
        1u128 << (pos.row() * N + pos.col())
    }

    /// Returns `true` if `pos` is in the set.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Copy of the mask with `pos` added.
    #[inline]
    #[must_use]
    pub fn with(self, pos: Position) -> Self {
        CellMask {
            bits: self.bits | Self::bit(pos),
        }
    }

    /// Copy of the mask with `pos` removed.
    #[inline]
    #[must_use]
    pub fn without(self, pos: Position) -> Self {
        CellMask {
            bits: self.bits & !Self::bit(pos),
        }
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the positions in the set, row-major.
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }
}

const fn even_parity_bits() -> u128 {
    let mut bits = 0u128;
    let mut idx = 0;
    while idx < CELLS {
        if (idx / N + idx % N) % 2 == 0 {
            bits |= 1u128 << idx;
        }
        idx += 1;
    }
    bits
}

impl FromIterator<Position> for CellMask {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(CellMask::EMPTY, CellMask::with)
    }
}

impl BitAnd for CellMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for CellMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl Not for CellMask {
    type Output = Self;
    fn not(self) -> Self {
        CellMask {
            bits: !self.bits & CellMask::FULL.bits,
        }
    }
}

/// Iterator over set cells.
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Position::new(idx / N, idx % N)
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
