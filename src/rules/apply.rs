//! Move application with legality checks

use crate::board::{topology, Board, Piece, Pos, Side};
use crate::error::{OncaError, Result};
use crate::moves::{midpoint, Move};

use super::capture::is_valid_jump;

/// Play `mv` for `side` and return the resulting board.
///
/// The input board is never modified. Geometry and occupancy are checked for
/// every move, so this also validates moves received from outside the engine.
///
/// # Errors
/// [`OncaError::IllegalMove`] when the move does not fit the board.
pub fn apply_move(board: &Board, side: Side, mv: &Move) -> Result<Board> {
    match mv {
        Move::Pass => Ok(*board),
        Move::Step { from, to } => apply_step(board, side, *from, *to),
        Move::Capture(path) => apply_capture(board, side, path),
    }
}

fn apply_step(board: &Board, side: Side, from: Pos, to: Pos) -> Result<Board> {
    if board.get(from) != side.piece() {
        return Err(illegal(format!("no piece of side {side} on {from}")));
    }
    if !board.is_empty(to) {
        return Err(illegal(format!("step target {to} is occupied")));
    }
    if !topology::can_step(from, to) {
        return Err(illegal(format!("no step link from {from} to {to}")));
    }

    let mut next = *board;
    next.relocate(from, to);
    Ok(next)
}

/// Hops are replayed one at a time on the evolving board, so each landing
/// cell and each captured Dog is checked against the position at that hop.
fn apply_capture(board: &Board, side: Side, path: &[Pos]) -> Result<Board> {
    if side != Side::Jaguar {
        return Err(illegal("only the jaguar captures".to_string()));
    }
    let Some((&start, landings)) = path.split_first() else {
        return Err(illegal("empty capture path".to_string()));
    };
    if landings.is_empty() {
        return Err(illegal("capture path has no landing cell".to_string()));
    }
    if start != board.jaguar() {
        return Err(illegal(format!("jaguar is not on {start}")));
    }

    let mut next = *board;
    let mut at = start;
    for &dest in landings {
        let mid = midpoint(at, dest)
            .ok_or_else(|| illegal(format!("no cell between {at} and {dest}")))?;
        if next.get(mid) != Piece::Dog {
            return Err(illegal(format!("no dog to capture on {mid}")));
        }
        if !next.is_empty(dest) {
            return Err(illegal(format!("landing cell {dest} is occupied")));
        }
        if !is_valid_jump(at, mid, dest) {
            return Err(illegal(format!("jump {at} -> {dest} is not allowed")));
        }
        next.remove_dog(mid);
        next.relocate(at, dest);
        at = dest;
    }
    Ok(next)
}

fn illegal(reason: String) -> OncaError {
    OncaError::IllegalMove(reason)
}
