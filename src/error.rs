//! Error types for the Onça engine

/// Errors raised at the text boundary and when applying moves
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OncaError {
    /// Board snapshot, move text or turn message could not be parsed
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Move violates board geometry or occupancy
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Result type for Onça operations
pub type Result<T> = std::result::Result<T, OncaError>;
