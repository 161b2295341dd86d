//! Board representation for Jogo da Onça

pub mod bitboard;
pub mod board;
pub mod topology;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Number of rows (1-based, 1..=7)
pub const ROWS: u8 = 7;
/// Number of columns (1-based, 1..=5)
pub const COLS: u8 = 5;
/// Cell slots in the row-major index space, including the nonexistent apex slots
pub const TOTAL_CELLS: usize = (ROWS as usize) * (COLS as usize); // 35

/// Dogs on the board at the start of a game
pub const INITIAL_DOGS: u32 = 14;
/// The Jaguar wins once the Dog count drops to this value
pub const JAGUAR_WIN_DOGS: u32 = 9;

/// Occupant of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Jaguar,
    Dog,
}

impl Piece {
    /// Snapshot symbol for this occupant
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::Jaguar => 'o',
            Piece::Dog => 'c',
            Piece::Empty => '-',
        }
    }

    #[inline]
    pub fn from_symbol(ch: char) -> Option<Piece> {
        match ch {
            'o' => Some(Piece::Jaguar),
            'c' => Some(Piece::Dog),
            '-' => Some(Piece::Empty),
            _ => None,
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Jaguar,
    Dogs,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Jaguar => Side::Dogs,
            Side::Dogs => Side::Jaguar,
        }
    }

    /// Piece kind moved by this side
    #[inline]
    pub fn piece(self) -> Piece {
        match self {
            Side::Jaguar => Piece::Jaguar,
            Side::Dogs => Piece::Dog,
        }
    }

    /// Wire symbol: `o` for the Jaguar, `c` for the Dogs
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Jaguar => 'o',
            Side::Dogs => 'c',
        }
    }

    #[inline]
    pub fn from_symbol(ch: char) -> Option<Side> {
        match ch {
            'o' => Some(Side::Jaguar),
            'c' => Some(Side::Dogs),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board, 1-based like the wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(
            Pos::is_valid(i32::from(row), i32::from(col)),
            "({row}, {col}) is not a board cell"
        );
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` unless it is a board cell
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Pos::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        (self.row as usize - 1) * COLS as usize + (self.col as usize - 1)
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS as usize) as u8 + 1,
            col: (idx % COLS as usize) as u8 + 1,
        }
    }

    /// Whether `(row, col)` names an existing cell of the board graph
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        topology::is_cell(row, col)
    }

    /// Parity of the cell: diagonal traversals start only from even cells
    #[inline]
    pub fn is_even(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (i32::from(self.row) - i32::from(other.row)).abs()
            + (i32::from(self.col) - i32::from(other.col)).abs()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
