//! Legal move generation for both sides

use crate::board::{topology, Board, Pos, Side};
use crate::moves::Move;

use super::capture::{generate_captures, has_capture};

/// All legal moves for `side`, in generation order.
///
/// Dogs only step. The Jaguar steps and additionally has every capture chain
/// (including each prefix of a longer chain). Ordering is left to the search.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    match side {
        Side::Dogs => generate_steps(board, Side::Dogs),
        Side::Jaguar => {
            let mut moves = generate_steps(board, Side::Jaguar);
            moves.extend(generate_captures(board));
            moves
        }
    }
}

/// Single-cell steps for every piece of `side`
pub fn generate_steps(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .iter_ones()
        .flat_map(|from| steps_from(board, from))
        .collect()
}

fn steps_from(board: &Board, from: Pos) -> impl Iterator<Item = Move> + '_ {
    topology::step_targets(from)
        .filter(move |&to| board.is_empty(to))
        .map(move |to| Move::step(from, to))
}

/// Whether the Jaguar has any legal move at all.
///
/// Cheaper than generating the full move list: stops at the first step or
/// single hop found.
pub fn jaguar_can_move(board: &Board) -> bool {
    steps_from(board, board.jaguar()).next().is_some() || has_capture(board)
}

/// Number of legal Jaguar moves, capture prefixes included
#[inline]
pub fn jaguar_mobility(board: &Board) -> usize {
    generate_moves(board, Side::Jaguar).len()
}
