//! Static board graph: valid cells, neighbor links and the parity rule.
//!
//! Rows 1-5 form a 5x5 grid where every cell links to its 8-neighborhood.
//! Rows 6-7 are the apex triangle, whose links are listed literally and are
//! not symmetric everywhere (`(7,3)` reaches `(6,2)` and `(6,4)` but not the
//! other way round). Every step and jump generator goes through
//! [`neighbors`] and [`parity_allows`].

use super::{Bitboard, Pos, TOTAL_CELLS};

/// Apex cells and their outgoing links, exactly as the board is drawn.
const APEX_LINKS: [(i32, i32, &[(i32, i32)]); 6] = [
    (6, 2, &[(5, 2), (5, 3), (6, 3), (7, 1)]),
    (6, 3, &[(5, 3), (6, 2), (6, 4), (7, 1), (7, 3), (7, 5)]),
    (6, 4, &[(5, 3), (5, 4), (6, 3), (7, 5)]),
    (7, 1, &[(6, 2), (6, 3), (7, 3)]),
    (7, 3, &[(6, 2), (6, 3), (6, 4), (7, 1), (7, 5)]),
    (7, 5, &[(6, 3), (6, 4), (7, 3)]),
];

/// Rows that follow the regular 8-neighborhood rule
const GRID_ROWS: i32 = 5;

/// Center of the board used by positional heuristics
pub const CENTER: Pos = Pos { row: 4, col: 3 };

const fn is_cell_const(row: i32, col: i32) -> bool {
    if row < 1 || row > 7 || col < 1 || col > 5 {
        return false;
    }
    match row {
        6 => col >= 2 && col <= 4,
        7 => col == 1 || col == 3 || col == 5,
        _ => true,
    }
}

const fn index(row: i32, col: i32) -> usize {
    ((row - 1) * 5 + (col - 1)) as usize
}

const fn bit(row: i32, col: i32) -> u64 {
    1u64 << index(row, col)
}

const fn build_cells() -> u64 {
    let mut mask = 0u64;
    let mut row = 1;
    while row <= 7 {
        let mut col = 1;
        while col <= 5 {
            if is_cell_const(row, col) {
                mask |= bit(row, col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}

const fn build_adjacency() -> [u64; TOTAL_CELLS] {
    let mut adj = [0u64; TOTAL_CELLS];

    // Grid rows: 8-neighborhood clipped to the grid
    let mut row = 1;
    while row <= GRID_ROWS {
        let mut col = 1;
        while col <= 5 {
            let mut dr = -1;
            while dr <= 1 {
                let mut dc = -1;
                while dc <= 1 {
                    let (r, c) = (row + dr, col + dc);
                    if !(dr == 0 && dc == 0) && r >= 1 && r <= GRID_ROWS && c >= 1 && c <= 5 {
                        adj[index(row, col)] |= bit(r, c);
                    }
                    dc += 1;
                }
                dr += 1;
            }
            col += 1;
        }
        row += 1;
    }

    // Apex: literal links; a grid cell enters the apex only where the apex cell lists it
    let mut i = 0;
    while i < APEX_LINKS.len() {
        let (row, col, links) = APEX_LINKS[i];
        let mut j = 0;
        while j < links.len() {
            let (r, c) = links[j];
            adj[index(row, col)] |= bit(r, c);
            if r <= GRID_ROWS {
                adj[index(r, c)] |= bit(row, col);
            }
            j += 1;
        }
        i += 1;
    }

    adj
}

static CELLS: Bitboard = Bitboard::from_bits(build_cells());
static ADJACENCY: [u64; TOTAL_CELLS] = build_adjacency();

/// Whether `(row, col)` is a cell of the board graph
#[inline]
pub fn is_cell(row: i32, col: i32) -> bool {
    is_cell_const(row, col)
}

/// Every valid cell, row-major
#[inline]
pub fn cells() -> Bitboard {
    CELLS
}

/// Outgoing neighbor set of a cell
#[inline]
pub fn neighbors(pos: Pos) -> Bitboard {
    Bitboard::from_bits(ADJACENCY[pos.to_index()])
}

#[inline]
pub fn is_neighbor(from: Pos, to: Pos) -> bool {
    neighbors(from).get(to)
}

/// A traversal is diagonal when it changes both row and column
#[inline]
pub fn is_diagonal(from: Pos, to: Pos) -> bool {
    from.row != to.row && from.col != to.col
}

/// Parity rule: diagonal traversals only leave cells with even `row + col`
#[inline]
pub fn parity_allows(from: Pos, to: Pos) -> bool {
    !is_diagonal(from, to) || from.is_even()
}

/// Neighbor link that a single step may follow
#[inline]
pub fn can_step(from: Pos, to: Pos) -> bool {
    is_neighbor(from, to) && parity_allows(from, to)
}

/// Cells reachable from `from` by a single step on an empty board
pub fn step_targets(from: Pos) -> impl Iterator<Item = Pos> {
    neighbors(from)
        .iter_ones()
        .filter(move |&to| parity_allows(from, to))
}
