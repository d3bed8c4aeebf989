//! Error types for the resolution engine.

use pg_core::CoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while generating a story tree.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A table lookup or entry selection failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Nested generation went deeper than the configured limit.
    #[error("recursion limit of {limit} levels exceeded while generating \"{table}\"")]
    DepthLimit {
        /// The table that would have exceeded the limit.
        table: String,
        /// The configured maximum depth.
        limit: usize,
    },

    /// The story tree grew beyond the configured node budget.
    #[error("node limit of {limit} exceeded while generating \"{label}\"")]
    NodeLimit {
        /// The node that would have exceeded the limit.
        label: String,
        /// The configured maximum node count.
        limit: usize,
    },
}

impl EngineError {
    /// The table name, if this error reports an unknown table.
    pub fn unknown_table(&self) -> Option<&str> {
        match self {
            Self::Core(CoreError::UnknownTable(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if generation stopped at a recursion guard.
    pub fn is_recursion_limit(&self) -> bool {
        matches!(self, Self::DepthLimit { .. } | Self::NodeLimit { .. })
    }
}
