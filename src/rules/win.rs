//! Win condition checking
//!
//! Win conditions:
//! 1. Jaguar: the Dog count drops to 9 or fewer (five captures)
//! 2. Dogs: the Jaguar has no step and no capture left

use crate::board::{Board, Side, JAGUAR_WIN_DOGS};

use super::movegen::jaguar_can_move;

/// Check whether `side` has met its own victory condition
pub fn has_won(board: &Board, side: Side) -> bool {
    match side {
        Side::Jaguar => board.dog_count() <= JAGUAR_WIN_DOGS,
        Side::Dogs => !jaguar_can_move(board),
    }
}

/// Winner of the position, regardless of whose turn it is.
///
/// The capture count is checked first, so a Jaguar that reaches five captures
/// wins even if the landing cell leaves it immobile.
pub fn winner(board: &Board) -> Option<Side> {
    if has_won(board, Side::Jaguar) {
        Some(Side::Jaguar)
    } else if has_won(board, Side::Dogs) {
        Some(Side::Dogs)
    } else {
        None
    }
}

#[inline]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some()
}
