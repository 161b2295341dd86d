//! Jaguar jumps and capture chains
//!
//! A hop goes from `origin` over a Dog on the neighboring cell `mid` to the
//! reflected cell `dest`. Beyond the reflection geometry the apex imposes its
//! own restrictions, enumerated in [`apex_allows`].

use crate::board::{topology, Bitboard, Board, Pos};
use crate::moves::{midpoint, Move};

/// Reflection of `origin` through `mid`, if it lands on a board cell
#[inline]
pub fn jump_landing(origin: Pos, mid: Pos) -> Option<Pos> {
    Pos::try_new(
        2 * i32::from(mid.row) - i32::from(origin.row),
        2 * i32::from(mid.col) - i32::from(origin.col),
    )
}

/// Geometric legality of one hop, ignoring occupancy.
///
/// The jumped cell must be a linked neighbor one row and/or column away from
/// `origin`, except on the row-7 lateral jump. The hop must also pass the
/// parity rule and [`apex_allows`].
pub fn is_valid_jump(origin: Pos, mid: Pos, dest: Pos) -> bool {
    if midpoint(origin, dest) != Some(mid) {
        return false;
    }
    if !topology::is_neighbor(origin, mid) {
        return false;
    }
    let unit = (i32::from(mid.row) - i32::from(origin.row)).abs() <= 1
        && (i32::from(mid.col) - i32::from(origin.col)).abs() <= 1;
    if !unit && !(origin.row == 7 && dest.row == 7) {
        return false;
    }
    if !topology::parity_allows(origin, mid) {
        return false;
    }
    apex_allows(origin, dest)
}

/// Jump restrictions specific to the apex triangle.
///
/// - row 7 to row 7 only as the full lateral jump (column distance 4)
/// - any other landing in row 7 must be column 3
/// - row 5 to row 7 only from column 3
/// - row 6 to row 4 from columns 2 or 4 must swap to the other one
pub fn apex_allows(origin: Pos, dest: Pos) -> bool {
    let col_dist = (i32::from(origin.col) - i32::from(dest.col)).abs();

    if origin.row == 7 && dest.row == 7 {
        return col_dist == 4;
    }
    if dest.row == 7 && dest.col != 3 {
        return false;
    }
    if origin.row == 5 && dest.row == 7 && origin.col != 3 {
        return false;
    }
    if origin.row == 6 && dest.row == 4 {
        match origin.col {
            2 => return dest.col == 4,
            4 => return dest.col == 2,
            _ => {}
        }
    }
    true
}

/// Check if the Jaguar has at least one single-hop capture.
pub fn has_capture(board: &Board) -> bool {
    let at = board.jaguar();
    topology::neighbors(at)
        .and(board.dogs())
        .iter_ones()
        .any(|mid| {
            jump_landing(at, mid)
                .is_some_and(|dest| board.is_empty(dest) && is_valid_jump(at, mid, dest))
        })
}

/// Every capture chain available to the Jaguar.
///
/// Each prefix of a longer chain is reported as its own move, so the search
/// can weigh stopping early against continuing.
pub fn generate_captures(board: &Board) -> Vec<Move> {
    let start = board.jaguar();
    let mut chains = Vec::new();
    let mut path = vec![start];
    explore_chains(
        board,
        start,
        Bitboard::new(),
        Bitboard::single(start),
        &mut path,
        &mut chains,
    );
    chains
}

/// Depth-first chain expansion from `at`.
///
/// `captured` holds the Dogs already taken by this chain and `visited` the
/// cells it has stood on; both are owned per call. Occupancy is read from the
/// board as it was before the chain started.
fn explore_chains(
    board: &Board,
    at: Pos,
    captured: Bitboard,
    visited: Bitboard,
    path: &mut Vec<Pos>,
    chains: &mut Vec<Move>,
) {
    for mid in topology::neighbors(at).and(board.dogs()).iter_ones() {
        if captured.get(mid) {
            continue;
        }
        let Some(dest) = jump_landing(at, mid) else {
            continue;
        };
        if visited.get(dest) || !board.is_empty(dest) || !is_valid_jump(at, mid, dest) {
            continue;
        }

        path.push(dest);
        chains.push(Move::Capture(path.clone()));
        explore_chains(
            board,
            dest,
            captured.with(mid),
            visited.with(dest),
            path,
            chains,
        );
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    fn board(jaguar: (u8, u8), dogs: &[(u8, u8)]) -> Board {
        Board::from_pieces(
            p(jaguar.0, jaguar.1),
            dogs.iter().map(|&(r, c)| p(r, c)),
        )
        .unwrap()
    }

    #[test]
    fn test_vertical_capture_into_apex() {
        let b = board((4, 3), &[(5, 3)]);
        let captures = generate_captures(&b);
        assert_eq!(captures, vec![Move::Capture(vec![p(4, 3), p(6, 3)])]);
    }

    #[test]
    fn test_jump_requires_empty_landing() {
        let b = board((4, 3), &[(5, 3), (6, 3)]);
        assert!(generate_captures(&b).is_empty());
        assert!(!has_capture(&b));
    }

    #[test]
    fn test_diagonal_jump_needs_even_origin() {
        // (2,3) is odd: no diagonal jump over (3,4) to (4,5)
        let b = board((2, 3), &[(3, 4)]);
        assert!(generate_captures(&b).is_empty());
        // (2,2) is even: diagonal jump allowed
        let b = board((2, 2), &[(3, 3)]);
        assert_eq!(
            generate_captures(&b),
            vec![Move::Capture(vec![p(2, 2), p(4, 4)])]
        );
    }

    #[test]
    fn test_row7_lateral_jump() {
        assert!(is_valid_jump(p(7, 1), p(7, 3), p(7, 5)));
        assert!(is_valid_jump(p(7, 5), p(7, 3), p(7, 1)));
        let b = board((7, 1), &[(7, 3)]);
        assert_eq!(
            generate_captures(&b),
            vec![Move::Capture(vec![p(7, 1), p(7, 5)])]
        );
    }

    #[test]
    fn test_row7_landing_must_be_column_3() {
        // (5,3) over (6,2) would land on (7,1)
        assert!(!is_valid_jump(p(5, 3), p(6, 2), p(7, 1)));
        assert!(!is_valid_jump(p(5, 3), p(6, 4), p(7, 5)));
        assert!(is_valid_jump(p(5, 3), p(6, 3), p(7, 3)));
    }

    #[test]
    fn test_row5_to_row7_needs_column_3() {
        assert!(!apex_allows(p(5, 2), p(7, 3)));
        assert!(apex_allows(p(5, 3), p(7, 3)));
    }

    #[test]
    fn test_row6_to_row4_column_swap() {
        assert!(is_valid_jump(p(6, 2), p(5, 3), p(4, 4)));
        assert!(!is_valid_jump(p(6, 2), p(5, 2), p(4, 2)));
        assert!(is_valid_jump(p(6, 4), p(5, 3), p(4, 2)));
        assert!(!is_valid_jump(p(6, 4), p(5, 4), p(4, 4)));
        // Column 3 is unrestricted
        assert!(is_valid_jump(p(6, 3), p(5, 3), p(4, 3)));
    }

    #[test]
    fn test_jump_must_start_with_unit_link() {
        // (7,1) links to (6,3), but two columns away
        assert!(!is_valid_jump(p(7, 1), p(6, 3), p(5, 5)));
        assert!(!is_valid_jump(p(7, 5), p(6, 3), p(5, 1)));
        // Not a midpoint
        assert!(!is_valid_jump(p(3, 3), p(3, 4), p(3, 3)));
    }

    #[test]
    fn test_apex_diagonal_jumps_out_of_row7() {
        assert!(is_valid_jump(p(7, 3), p(6, 2), p(5, 1)));
        assert!(is_valid_jump(p(7, 3), p(6, 4), p(5, 5)));

        let b = board((7, 3), &[(6, 2), (1, 1)]);
        assert_eq!(
            generate_captures(&b),
            vec![Move::Capture(vec![p(7, 3), p(5, 1)])]
        );
        assert!(has_capture(&b));

        let b = board((7, 3), &[(6, 4), (1, 1)]);
        assert_eq!(
            generate_captures(&b),
            vec![Move::Capture(vec![p(7, 3), p(5, 5)])]
        );
    }

    #[test]
    fn test_chain_prefixes_are_separate_moves() {
        // (5,1) -> (3,1) over (4,1), then (3,1) -> (1,1) over (2,1)
        let b = board((5, 1), &[(4, 1), (2, 1)]);
        let captures = generate_captures(&b);
        assert_eq!(
            captures,
            vec![
                Move::Capture(vec![p(5, 1), p(3, 1)]),
                Move::Capture(vec![p(5, 1), p(3, 1), p(1, 1)]),
            ]
        );
    }

    #[test]
    fn test_chain_branches() {
        // From (3,3): over (3,2) to (3,1), or over (3,4) to (3,5)
        let b = board((3, 3), &[(3, 2), (3, 4)]);
        let captures = generate_captures(&b);
        assert_eq!(captures.len(), 2);
        assert!(captures.iter().all(|m| m.capture_count() == 1));
    }

    #[test]
    fn test_chain_never_recaptures() {
        // Jumping back over the same Dog is impossible within one chain
        let b = board((3, 1), &[(3, 2)]);
        let captures = generate_captures(&b);
        assert_eq!(captures, vec![Move::Capture(vec![p(3, 1), p(3, 3)])]);
    }

    #[test]
    fn test_chain_does_not_revisit_cells() {
        // Square of four Dogs around (2,2)..(4,4): the loop must not close on itself
        let b = board((1, 1), &[(1, 2), (1, 4), (2, 5), (3, 4), (4, 3), (3, 2), (2, 1)]);
        for mv in generate_captures(&b) {
            let Move::Capture(path) = &mv else {
                panic!("non-capture move {mv:?}");
            };
            let mut seen = Bitboard::new();
            for &cell in path {
                assert!(!seen.get(cell), "chain {path:?} revisits {cell}");
                seen.set(cell);
            }
            let mut taken = Bitboard::new();
            for cell in mv.captured_cells() {
                assert!(!taken.get(cell), "chain {path:?} recaptures {cell}");
                taken.set(cell);
            }
        }
    }
}
