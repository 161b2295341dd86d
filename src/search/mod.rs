//! Search module for the Onça AI
//!
//! Contains:
//! - Move ordering by capture size and proximity
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use ordering::{order_moves, score_move};
