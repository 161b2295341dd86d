//! Game rules for Jogo da Onça
//!
//! This module implements the rule set:
//! - Step and capture-chain generation
//! - Jump geometry, including the apex exceptions
//! - Move application with legality checks
//! - Win conditions (five captures, trapped Jaguar)

pub mod apply;
pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use apply::apply_move;
pub use capture::{apex_allows, generate_captures, has_capture, is_valid_jump, jump_landing};
pub use movegen::{generate_moves, generate_steps, jaguar_can_move, jaguar_mobility};
pub use win::{has_won, is_terminal, winner};
