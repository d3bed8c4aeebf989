/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by tables and the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A table was requested by name but is not registered.
    #[error("unknown table: \"{0}\"")]
    UnknownTable(String),

    /// A table's entries cannot serve the rolls made against it.
    #[error("table \"{table}\" is misconfigured: {reason}")]
    Configuration {
        /// The offending table.
        table: String,
        /// What is wrong with it.
        reason: String,
    },
}
