//! Error types for lectio core.

use thiserror::Error;

/// Core errors that can occur during token and payload operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid short id: {0}")]
    InvalidShortId(String),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),

    #[error("encryption error: {0}")]
    EncryptionError(String),

    #[error("decryption error: {0}")]
    DecryptionError(String),
}
