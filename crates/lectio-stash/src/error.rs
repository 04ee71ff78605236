//! Error types for the stash module.

use thiserror::Error;

/// Errors that can occur during stash operations.
///
/// A missing key is NOT an error; reads return `Ok(None)`. Errors are
/// reserved for backend failures.
#[derive(Debug, Error)]
pub enum StashError {
    /// Backing store failure.
    #[error("stash backend error: {0}")]
    Backend(String),

    /// Value could not be stored or read back intact.
    #[error("invalid stash data: {0}")]
    InvalidData(String),
}

/// Result type for stash operations.
pub type Result<T> = std::result::Result<T, StashError>;
