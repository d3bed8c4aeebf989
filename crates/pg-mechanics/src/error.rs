//! Error types for dice mechanics.

/// Errors that can occur while building dice formulas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die was declared with fewer than two faces.
    #[error("a die needs at least 2 faces, got {0}")]
    TooFewFaces(u32),

    /// A die was declared with more faces than a roll can represent.
    #[error("a die can have at most 2147483647 faces, got {0}")]
    TooManyFaces(u32),

    /// Dice notation could not be parsed.
    #[error("invalid dice formula '{input}': {reason}")]
    InvalidFormula {
        /// The notation as given.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
