//! Error types for the app shell.

use thiserror::Error;

/// Errors surfaced by the app shell.
///
/// Network failures are user-visible messages, never fatal to the shell; the
/// worst case is a permanently-denied or content-less screen.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level HTTP failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The access-check endpoint answered with a non-OK status.
    #[error("access check failed with status {0}")]
    GateStatus(u16),

    /// The lesson-content endpoint answered with a non-OK status.
    #[error("lesson content fetch failed with status {0}")]
    ContentStatus(u16),

    /// A response did not have the agreed shape.
    #[error("unexpected response shape: {0}")]
    BadResponse(String),

    /// No module with this id in the catalog.
    #[error("unknown module {0}")]
    UnknownModule(u32),

    /// No lesson at this index within the module.
    #[error("unknown lesson {index} in module {module}")]
    UnknownLesson { module: u32, index: usize },

    /// Grant infrastructure failure.
    #[error("grant error: {0}")]
    Grant(#[from] lectio_grant::GrantError),
}

/// Result type for app shell operations.
pub type Result<T> = std::result::Result<T, AppError>;
