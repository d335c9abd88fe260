use thiserror::Error;

/// Top-level error type for the tt-core crate and dependents.
#[derive(Debug, Error)]
pub enum TtError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("empty input: nothing to analyze")]
    EmptyInput,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("remote computation failed: {0}")]
    Remote(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, TtError>;
