use thiserror::Error;

/// Result type for username store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("username already taken: {0}")]
    Conflict(String),
    #[error("username store unavailable: {0}")]
    Unavailable(String),
    #[error("username store operation timed out: {0}")]
    Timeout(String),
    #[error("username store query failed: {0}")]
    Query(String),
    #[error("username store operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
    #[error("generator produced an empty username for seed {0:?}")]
    EmptyUsername(Option<String>),
}

/// Errors surfaced by a [`Suggester`](crate::Suggester).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown driver: {0}")]
    UnknownDriver(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("no unique variant of '{candidate}' found after {attempts} attempts")]
    Exhausted { candidate: String, attempts: u64 },
}
