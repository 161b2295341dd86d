//! Jogo da Onça AI engine
//!
//! An engine for the asymmetric capture game played by one Jaguar against
//! fourteen Dogs:
//! - Irregular board: a 5x5 grid plus a triangular apex below it
//! - Diagonal traversal only from cells whose row+column is even
//! - The Jaguar captures by jumping, chaining jumps in a single turn
//! - The Jaguar wins once five Dogs are captured
//! - The Dogs win by leaving the Jaguar without a move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board topology and occupancy bitboards
//! - [`rules`]: Move generation, capture chains, move application, win checks
//! - [`notation`]: Snapshot and move text used by the transport
//! - [`eval`]: Position evaluation
//! - [`search`]: Move ordering and alpha-beta search
//! - [`engine`]: Main AI engine wrapping the search
//! - [`session`], [`referee`]: Both ends of the turn-coordination transport
//!
//! # Quick Start
//!
//! ```
//! use onca::{Board, Engine, SearchConfig, Side};
//! use onca::notation::format_move;
//!
//! let board = Board::new();
//! let mut engine = Engine::with_config(SearchConfig::unlimited(2));
//!
//! // The Jaguar opens
//! if let Some(mv) = engine.get_move(&board, Side::Jaguar) {
//!     let next = board.apply_move(Side::Jaguar, &mv).unwrap();
//!     println!("{}", format_move(Side::Jaguar, &mv));
//!     print!("{next}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod moves;
pub mod notation;
pub mod referee;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, Side};
pub use config::SearchConfig;
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{OncaError, Result};
pub use moves::Move;
pub use referee::{Outcome, Referee};
pub use session::Session;
