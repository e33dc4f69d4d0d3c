//! Repository error types.

use crate::domain::DomainError;

/// Errors from loading or querying flight data.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Reading the flight data file failed
    #[error("failed to read flight data: {0}")]
    Io(#[from] std::io::Error),

    /// The flight data file is not valid JSON
    #[error("failed to parse flight data: {0}")]
    Json(#[from] serde_json::Error),

    /// A flight record violates a domain invariant
    #[error("invalid flight record: {0}")]
    Invalid(#[from] DomainError),
}
