//! Move ordering for alpha-beta pruning
//!
//! Better moves first means earlier cutoffs. The Jaguar tries its longest
//! captures first; the Dogs try steps that close in on the Jaguar.

use crate::board::{topology::CENTER, Board, Side};
use crate::moves::Move;

/// Per Dog removed by a capture chain
const CAPTURE_HOP: i32 = 1_000;
/// Extra for chains of two or more hops
const MULTI_CAPTURE: i32 = 500;
/// Per unit of Manhattan distance between the Jaguar's landing cell and the center
const CENTER_DISTANCE: i32 = 10;
/// Dog step towards the Jaguar's side of the board
const FORWARD_STEP: i32 = 50;
/// Dog step that reduces the distance to the Jaguar
const APPROACH_STEP: i32 = 30;

/// Priority of a single move for `side`; higher is tried first.
#[must_use]
pub fn score_move(board: &Board, side: Side, mv: &Move) -> i32 {
    match (side, mv) {
        (_, Move::Pass) => 0,
        (Side::Jaguar, _) => {
            let hops = mv.capture_count() as i32;
            let mut score = hops * CAPTURE_HOP;
            if hops > 1 {
                score += MULTI_CAPTURE;
            }
            if let Some(dest) = mv.destination() {
                score -= dest.manhattan(CENTER) * CENTER_DISTANCE;
            }
            score
        }
        (Side::Dogs, Move::Step { from, to }) => {
            let mut score = 0;
            if to.row > from.row {
                score += FORWARD_STEP;
            }
            let jaguar = board.jaguar();
            if to.manhattan(jaguar) < from.manhattan(jaguar) {
                score += APPROACH_STEP;
            }
            score
        }
        (Side::Dogs, Move::Capture(_)) => 0,
    }
}

/// Sort `moves` by descending priority.
///
/// The sort is stable, so moves with equal priority keep generation order.
pub fn order_moves(board: &Board, side: Side, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score_move(board, side, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::generate_moves;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_captures_before_steps() {
        let board = Board::from_pieces(p(5, 1), [p(4, 1), p(2, 1), p(5, 2)]).unwrap();
        let mut moves = generate_moves(&board, Side::Jaguar);
        order_moves(&board, Side::Jaguar, &mut moves);

        assert_eq!(moves[0], Move::Capture(vec![p(5, 1), p(3, 1), p(1, 1)]));
        assert!(moves[1].is_capture());
        assert!(moves.iter().skip_while(|m| m.is_capture()).all(|m| !m.is_capture()));
    }

    #[test]
    fn test_jaguar_steps_prefer_center() {
        let board = Board::new();
        let mut moves = generate_moves(&board, Side::Jaguar);
        order_moves(&board, Side::Jaguar, &mut moves);
        assert_eq!(moves[0], Move::step(p(3, 3), p(4, 3)));
    }

    #[test]
    fn test_dog_steps_prefer_forward_approach() {
        let board = Board::from_pieces(p(5, 3), [p(3, 3)]).unwrap();
        let forward = Move::step(p(3, 3), p(4, 3));
        let sideways = Move::step(p(3, 3), p(3, 4));
        let back = Move::step(p(3, 3), p(2, 3));
        assert_eq!(score_move(&board, Side::Dogs, &forward), FORWARD_STEP + APPROACH_STEP);
        assert_eq!(score_move(&board, Side::Dogs, &sideways), 0);
        assert_eq!(score_move(&board, Side::Dogs, &back), 0);

        let mut moves = generate_moves(&board, Side::Dogs);
        order_moves(&board, Side::Dogs, &mut moves);
        assert_eq!(moves[0], forward);
    }

    #[test]
    fn test_ordering_is_stable() {
        let board = Board::new();
        let generated = generate_moves(&board, Side::Dogs);
        let mut ordered = generated.clone();
        order_moves(&board, Side::Dogs, &mut ordered);

        let scores: Vec<i32> = ordered
            .iter()
            .map(|m| score_move(&board, Side::Dogs, m))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        // Equal scores keep their relative generation order
        for pair in ordered.windows(2) {
            if score_move(&board, Side::Dogs, &pair[0]) == score_move(&board, Side::Dogs, &pair[1]) {
                let i = generated.iter().position(|m| *m == pair[0]);
                let j = generated.iter().position(|m| *m == pair[1]);
                assert!(i < j);
            }
        }
    }
}
