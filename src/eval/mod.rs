//! Evaluation module for Onça positions
//!
//! This module scores a position from one side's point of view.
//! The evaluation considers:
//! - Dogs captured or still standing
//! - Jaguar mobility and available captures
//! - Encirclement and formation of the Dogs
//! - Positional bonuses (centrality, advance)

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::Weights;
