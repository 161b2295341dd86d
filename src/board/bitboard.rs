//! Bitboard over the 7x5 cell index space

use super::{Pos, TOTAL_CELLS};

/// Set of cells packed into one word.
/// Bit `i` is the cell with `Pos::to_index() == i`; 35 slots fit in a u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub(crate) const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Single-cell bitboard
    #[inline]
    pub fn single(pos: Pos) -> Self {
        Self {
            bits: 1u64 << pos.to_index(),
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Copy of this set with `pos` added
    #[inline]
    #[must_use]
    pub fn with(self, pos: Pos) -> Self {
        Self {
            bits: self.bits | (1u64 << pos.to_index()),
        }
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn intersects(&self, other: Bitboard) -> bool {
        self.bits & other.bits != 0
    }

    #[inline]
    #[must_use]
    pub fn and(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & other.bits)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut bb = Bitboard::new();
        for pos in iter {
            bb.set(pos);
        }
        bb
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }
}
