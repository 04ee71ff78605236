//! Error types for the playback engine.

use thiserror::Error;

/// Capability failures surfaced by a rendering surface.
///
/// All of these are advisory: the engine logs them and degrades to the
/// pre-request state instead of propagating.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The play request was rejected (e.g. autoplay policy).
    #[error("playback request rejected: {0}")]
    PlaybackRejected(String),

    /// The fullscreen request failed or is unsupported.
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}

/// Result type for capability operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
