use thiserror::Error;

/// Errors that can occur during table operations.
///
/// A missing record is never an error: lookups return `Ok(None)` and deletes
/// of absent keys succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true when the backing table could not be reached or refused
    /// to complete the operation.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
