//! Shared error model.

use thiserror::Error;

/// Result type used across the session/navigation layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Layer-wide error.
///
/// Keep this focused on deterministic validation failures; transport and
/// storage concerns belong to the crates that own them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An enum wire value was not recognized.
    #[error("unrecognized value: {0}")]
    Unrecognized(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unrecognized(msg: impl Into<String>) -> Self {
        Self::Unrecognized(msg.into())
    }
}
