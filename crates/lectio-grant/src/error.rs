//! Error types for the grant module.

use thiserror::Error;

/// Errors that can occur during grant operations.
///
/// Token-level rejections (bad format, missing stash entry, digest mismatch,
/// unopenable blob) are NOT errors; `redeem` returns `Ok(None)` for all of
/// them. Errors are reserved for infrastructure failures.
#[derive(Debug, Error)]
pub enum GrantError {
    /// Core primitive failure (sealing, encoding).
    #[error("core error: {0}")]
    Core(#[from] lectio_core::CoreError),

    /// Stash backend failure.
    #[error("stash error: {0}")]
    Stash(#[from] lectio_stash::StashError),

    /// Serialization of the stash wrapper failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for grant operations.
pub type Result<T> = std::result::Result<T, GrantError>;
