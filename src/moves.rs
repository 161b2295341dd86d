//! Move representation

use crate::board::Pos;

/// A single turn for either side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Relocate one piece to a neighboring empty cell
    Step { from: Pos, to: Pos },
    /// Jaguar jump chain: start cell followed by every landing cell.
    /// Each consecutive pair removes the Dog at its midpoint.
    Capture(Vec<Pos>),
    /// No board change
    Pass,
}

impl Move {
    #[inline]
    pub fn step(from: Pos, to: Pos) -> Self {
        Move::Step { from, to }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    /// Number of Dogs removed by this move
    #[inline]
    pub fn capture_count(&self) -> usize {
        match self {
            Move::Capture(path) => path.len().saturating_sub(1),
            _ => 0,
        }
    }

    /// Cell the moving piece starts from
    pub fn origin(&self) -> Option<Pos> {
        match self {
            Move::Step { from, .. } => Some(*from),
            Move::Capture(path) => path.first().copied(),
            Move::Pass => None,
        }
    }

    /// Cell the moving piece ends on
    pub fn destination(&self) -> Option<Pos> {
        match self {
            Move::Step { to, .. } => Some(*to),
            Move::Capture(path) => path.last().copied(),
            Move::Pass => None,
        }
    }

    /// Midpoint cells of every hop, in jump order
    pub fn captured_cells(&self) -> Vec<Pos> {
        match self {
            Move::Capture(path) => path
                .windows(2)
                .filter_map(|hop| midpoint(hop[0], hop[1]))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Cell halfway between two cells, if the halfway point is a board cell
#[inline]
pub fn midpoint(from: Pos, to: Pos) -> Option<Pos> {
    let (r, c) = (
        i32::from(from.row) + i32::from(to.row),
        i32::from(from.col) + i32::from(to.col),
    );
    if r % 2 != 0 || c % 2 != 0 {
        return None;
    }
    Pos::try_new(r / 2, c / 2)
}
