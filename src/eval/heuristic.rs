//! Heuristic evaluation function for Onça board positions
//!
//! Scores are from the point of view of one side. The two sides value
//! different things, so the function is not symmetric: the Jaguar counts
//! captures and freedom of movement, the Dogs count survivors and how tightly
//! the Jaguar is boxed in.

use crate::board::{topology, Board, Side, INITIAL_DOGS};
use crate::rules::{generate_moves, winner};

use super::weights::Weights;

/// Evaluate the board from the perspective of the given side.
///
/// Returns a score where:
/// - Positive values indicate advantage for `side`
/// - `Weights::WIN` indicates `side` has already won
/// - `-Weights::WIN` indicates `side` has already lost
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    if let Some(won) = winner(board) {
        return if won == side {
            Weights::WIN
        } else {
            -Weights::WIN
        };
    }

    match side {
        Side::Jaguar => evaluate_jaguar(board),
        Side::Dogs => evaluate_dogs(board),
    }
}

fn evaluate_jaguar(board: &Board) -> i32 {
    let dogs = board.dog_count() as i32;
    let jaguar = board.jaguar();
    let moves = generate_moves(board, Side::Jaguar);
    let mobility = moves.len() as i32;

    let mut score = board.captured_count() as i32 * Weights::CAPTURED_DOG;
    if dogs <= Weights::NEAR_WIN_DOGS {
        score += (Weights::NEAR_WIN_DOGS - dogs) * Weights::NEAR_WIN_BONUS;
    }

    score += mobility.min(Weights::MOBILITY_CAP) * Weights::JAGUAR_MOBILITY;

    let centrality = 5 - (i32::from(jaguar.col) - 3).abs();
    score += centrality * Weights::CENTRALITY;
    score += i32::from(jaguar.row) * Weights::ADVANCE;

    // Single hops: one per capturable Dog
    let captures = moves.iter().filter(|mv| mv.capture_count() == 1).count() as i32;
    score += captures * Weights::CAPTURE_OPPORTUNITY;

    if mobility <= Weights::CORNERED_MOBILITY {
        score -= Weights::CORNERED;
    }
    if mobility == 0 {
        score -= Weights::IMMOBILE;
    }

    let adjacent = topology::neighbors(jaguar).and(board.dogs()).count() as i32;
    score - adjacent * Weights::ADJACENT_DOG
}

fn evaluate_dogs(board: &Board) -> i32 {
    let dogs = board.dog_count() as i32;
    debug_assert!(dogs <= INITIAL_DOGS as i32);

    let mut score = dogs * Weights::SURVIVING_DOG;
    if dogs <= Weights::NEAR_WIN_DOGS {
        score -= (Weights::NEAR_WIN_DOGS - dogs) * Weights::LOSS_PENALTY;
    }

    let mobility = generate_moves(board, Side::Jaguar).len() as i32;
    score += (Weights::MOBILITY_CAP - mobility).max(0) * Weights::RESTRICTION;
    if mobility == 0 {
        score += Weights::TRAP_BONUS;
    } else if mobility <= Weights::CORNERED_MOBILITY {
        score += Weights::NEAR_TRAP_BONUS;
    }

    // Encirclement
    let links = topology::neighbors(board.jaguar());
    let encircling = links.and(board.dogs()).count() as i32;
    score += encircling * Weights::ENCIRCLING_DOG;
    if !links.is_empty() {
        score += encircling * Weights::ENCIRCLEMENT / links.count() as i32;
    }

    // Formation: linked pairs, each counted once
    let dog_cells = board.dogs();
    let pairs: u32 = dog_cells
        .iter_ones()
        .map(|dog| {
            topology::neighbors(dog)
                .and(dog_cells)
                .iter_ones()
                .filter(|&other| other > dog || !topology::is_neighbor(other, dog))
                .count() as u32
        })
        .sum();
    score += pairs as i32 * Weights::FORMATION;

    let advance: i32 = dog_cells
        .iter_ones()
        .filter(|dog| dog.row >= 4)
        .map(|dog| i32::from(dog.row) - 3)
        .sum();
    score + advance * Weights::DOG_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_win_loss_scores() {
        let dogs: Vec<Pos> = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row == 1 || (pos.row == 2 && pos.col <= 4))
            .collect();
        let board = Board::from_pieces(p(5, 3), dogs).unwrap();
        assert_eq!(board.dog_count(), 9);
        assert_eq!(evaluate(&board, Side::Jaguar), Weights::WIN);
        assert_eq!(evaluate(&board, Side::Dogs), -Weights::WIN);
    }

    #[test]
    fn test_trapped_jaguar_scores() {
        let mut dogs = vec![p(6, 2), p(6, 3), p(7, 3), p(5, 3), p(7, 5)];
        dogs.extend((1..=5).map(|c| p(1, c)));
        let board = Board::from_pieces(p(7, 1), dogs).unwrap();
        assert_eq!(evaluate(&board, Side::Dogs), Weights::WIN);
        assert_eq!(evaluate(&board, Side::Jaguar), -Weights::WIN);
    }

    #[test]
    fn test_scores_stay_below_win() {
        let board = Board::new();
        for side in [Side::Jaguar, Side::Dogs] {
            let score = evaluate(&board, side);
            assert!(score.abs() < Weights::WIN, "{side}: {score}");
        }
    }

    #[test]
    fn test_jaguar_prefers_captures() {
        let before = Board::new();
        let after = Board::from_pieces(
            p(3, 3),
            before.dogs().iter_ones().filter(|&d| d != p(2, 3)),
        )
        .unwrap();
        assert!(evaluate(&after, Side::Jaguar) > evaluate(&before, Side::Jaguar));
        assert!(evaluate(&after, Side::Dogs) < evaluate(&before, Side::Dogs));
    }

    #[test]
    fn test_dogs_prefer_tighter_encirclement() {
        let loose_dogs: Vec<Pos> = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row <= 2)
            .chain([p(3, 1), p(3, 5)])
            .collect();
        let loose = Board::from_pieces(p(5, 3), loose_dogs).unwrap();

        // Same number of Dogs, two of them moved next to the Jaguar
        let tight_dogs: Vec<Pos> = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row <= 2)
            .chain([p(4, 2), p(4, 4)])
            .collect();
        let tight = Board::from_pieces(p(5, 3), tight_dogs).unwrap();

        assert_eq!(loose.dog_count(), tight.dog_count());
        assert!(evaluate(&tight, Side::Dogs) > evaluate(&loose, Side::Dogs));
    }

    #[test]
    fn test_dogs_value_survivors_over_restriction() {
        // Fourteen Dogs, Jaguar free in the middle with eight steps
        let free_dogs: Vec<Pos> = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row <= 3 && *pos != p(3, 3))
            .collect();
        let free = Board::from_pieces(p(5, 3), free_dogs).unwrap();
        assert_eq!(free.dog_count(), 14);
        assert_eq!(generate_moves(&free, Side::Jaguar).len(), 8);

        // Thirteen Dogs, Jaguar boxed into the apex corner with one step left
        let mut boxed_dogs = vec![p(6, 2), p(7, 3), p(5, 3), p(6, 4), p(7, 5)];
        boxed_dogs.extend((1..=5).map(|c| p(1, c)));
        boxed_dogs.extend([p(2, 1), p(2, 3), p(2, 5)]);
        let boxed = Board::from_pieces(p(7, 1), boxed_dogs).unwrap();
        assert_eq!(boxed.dog_count(), 13);
        assert_eq!(generate_moves(&boxed, Side::Jaguar).len(), 1);

        assert!(evaluate(&free, Side::Dogs) > evaluate(&boxed, Side::Dogs));
    }

    #[test]
    fn test_jaguar_values_captures_over_freedom() {
        // Eleven Dogs left but the Jaguar is cornered
        let mut dogs = vec![p(6, 2), p(7, 3), p(5, 3), p(6, 4), p(7, 5), p(2, 3)];
        dogs.extend((1..=5).map(|c| p(1, c)));
        let cornered = Board::from_pieces(p(7, 1), dogs).unwrap();
        assert_eq!(cornered.dog_count(), 11);

        // Twelve Dogs and a free Jaguar
        let free_dogs: Vec<Pos> = topology::cells()
            .iter_ones()
            .filter(|pos| pos.row <= 2)
            .chain([p(3, 1), p(3, 5)])
            .collect();
        let free = Board::from_pieces(p(5, 3), free_dogs).unwrap();
        assert_eq!(free.dog_count(), 12);

        assert!(evaluate(&cornered, Side::Jaguar) > evaluate(&free, Side::Jaguar));
    }

    #[test]
    fn test_capture_count_dominates_position() {
        // Twelve Dogs scattered vs fourteen Dogs in the opening: the Jaguar
        // must prefer the position with more captures wherever it stands.
        let mut dogs: Vec<Pos> = Board::new().dogs().iter_ones().collect();
        dogs.retain(|&d| d != p(1, 1) && d != p(1, 5));
        let captured = Board::from_pieces(p(1, 1), dogs).unwrap();
        assert!(
            evaluate(&captured, Side::Jaguar) > evaluate(&Board::new(), Side::Jaguar)
        );
    }
}
