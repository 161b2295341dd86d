//! Evaluation weights
//!
//! Orderings that must hold between the groups:
//! - `WIN` is larger than any reachable sum of terms
//! - one captured Dog outweighs the full spread of the Jaguar's positional
//!   terms (at most 100 + 50 + 28 + 160 = 338 up, 20 + 40 = 60 down)
//! - one surviving Dog outweighs the sum of the Dogs' positional terms
//!   (at most 190 + 100 + 120 + 60 + 56 + 68 = 594)

/// Scoring weights for evaluation
pub struct Weights;

impl Weights {
    /// Decided game
    pub const WIN: i32 = 10_000;

    // Jaguar perspective
    /// Per Dog captured so far
    pub const CAPTURED_DOG: i32 = 500;
    /// Extra per Dog below `NEAR_WIN_DOGS` remaining
    pub const NEAR_WIN_BONUS: i32 = 200;
    /// Per legal Jaguar move, up to `MOBILITY_CAP` moves
    pub const JAGUAR_MOBILITY: i32 = 5;
    /// Per column of closeness to the middle column
    pub const CENTRALITY: i32 = 10;
    /// Per row of depth into the board
    pub const ADVANCE: i32 = 4;
    /// Per Dog the Jaguar can capture right now
    pub const CAPTURE_OPPORTUNITY: i32 = 20;
    /// Jaguar with two moves or fewer
    pub const CORNERED: i32 = 20;
    /// Jaguar without moves
    pub const IMMOBILE: i32 = 5_000;
    /// Per Dog next to the Jaguar
    pub const ADJACENT_DOG: i32 = 5;

    // Dogs perspective
    /// Per Dog still on the board
    pub const SURVIVING_DOG: i32 = 650;
    /// Extra per Dog lost below `NEAR_WIN_DOGS`
    pub const LOSS_PENALTY: i32 = 400;
    /// Per Jaguar move short of `MOBILITY_CAP`
    pub const RESTRICTION: i32 = 10;
    /// Jaguar without moves
    pub const TRAP_BONUS: i32 = 2_000;
    /// Jaguar with two moves or fewer
    pub const NEAR_TRAP_BONUS: i32 = 100;
    /// Per Dog on a cell the Jaguar links to
    pub const ENCIRCLING_DOG: i32 = 15;
    /// Scaled by the occupied fraction of the Jaguar's links
    pub const ENCIRCLEMENT: i32 = 60;
    /// Per pair of linked Dogs
    pub const FORMATION: i32 = 1;
    /// Per row a Dog stands beyond row 3
    pub const DOG_ADVANCE: i32 = 2;

    /// Dog count at which the endgame escalation starts
    pub const NEAR_WIN_DOGS: i32 = 11;
    /// Jaguar mobility treated as fully free
    pub const MOBILITY_CAP: i32 = 20;
    /// Mobility at or below which the Jaguar counts as cornered
    pub const CORNERED_MOBILITY: i32 = 2;
}
