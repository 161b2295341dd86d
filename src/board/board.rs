//! Immutable board snapshot

use super::bitboard::Bitboard;
use super::{topology, Piece, Pos, Side, INITIAL_DOGS};
use crate::error::{OncaError, Result};
use crate::moves::Move;
use crate::rules;

/// Occupancy snapshot of every board cell.
///
/// The board is a small `Copy` value: applying a move yields a new board and
/// never touches the one it came from, so search branches cannot alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// The single Jaguar
    jaguar: Pos,
    /// Dog occupancy
    dogs: Bitboard,
}

impl Board {
    /// Opening layout: Dogs fill rows 1-3, the Jaguar sits on (3,3)
    pub fn new() -> Self {
        let jaguar = Pos::new(3, 3);
        let dogs = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row <= 3 && *pos != jaguar)
            .collect();
        Self { jaguar, dogs }
    }

    /// Build a board from piece locations.
    ///
    /// Fails when a Dog shares the Jaguar's cell or more than the initial
    /// number of Dogs is supplied.
    pub fn from_pieces<I>(jaguar: Pos, dogs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Pos>,
    {
        let dogs: Bitboard = dogs.into_iter().collect();
        if dogs.get(jaguar) {
            return Err(OncaError::MalformedInput(format!(
                "dog and jaguar share cell {jaguar}"
            )));
        }
        if dogs.count() > INITIAL_DOGS {
            return Err(OncaError::MalformedInput(format!(
                "{} dogs on board, at most {INITIAL_DOGS} allowed",
                dogs.count()
            )));
        }
        Ok(Self { jaguar, dogs })
    }

    /// Get the occupant of a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        if pos == self.jaguar {
            Piece::Jaguar
        } else if self.dogs.get(pos) {
            Piece::Dog
        } else {
            Piece::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos != self.jaguar && !self.dogs.get(pos)
    }

    #[inline]
    pub fn jaguar(&self) -> Pos {
        self.jaguar
    }

    #[inline]
    pub fn dogs(&self) -> Bitboard {
        self.dogs
    }

    #[inline]
    pub fn dog_count(&self) -> u32 {
        self.dogs.count()
    }

    /// Dogs removed since the opening layout
    #[inline]
    pub fn captured_count(&self) -> u32 {
        INITIAL_DOGS.saturating_sub(self.dogs.count())
    }

    /// Cells holding a piece of the given side
    pub fn pieces(&self, side: Side) -> Bitboard {
        match side {
            Side::Jaguar => Bitboard::single(self.jaguar),
            Side::Dogs => self.dogs,
        }
    }

    /// Move the piece on `from` to the empty cell `to` (no legality check)
    #[inline]
    pub(crate) fn relocate(&mut self, from: Pos, to: Pos) {
        if from == self.jaguar {
            self.jaguar = to;
        } else {
            self.dogs.clear(from);
            self.dogs.set(to);
        }
    }

    /// Remove a Dog (no legality check)
    #[inline]
    pub(crate) fn remove_dog(&mut self, pos: Pos) {
        self.dogs.clear(pos);
    }

    /// Legal moves for `side`, unordered
    pub fn generate_moves(&self, side: Side) -> Vec<Move> {
        rules::generate_moves(self, side)
    }

    /// New board with `mv` played by `side`
    pub fn apply_move(&self, side: Side, mv: &Move) -> Result<Board> {
        rules::apply_move(self, side, mv)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        rules::winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
