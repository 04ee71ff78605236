//! # Lectio Core
//!
//! Pure primitives for the lectio video-grant handoff: short identifiers,
//! truncated integrity digests, sealed payloads, and the token codec.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over the wire forms that cross the handoff boundary.
//!
//! ## Key Types
//!
//! - [`ShortId`] - 4 random bytes rendered as 8 hex characters
//! - [`TokenDigest`] - truncated Blake3 digest binding a sealed blob to its id
//! - [`GrantToken`] - the URL-escaped `shortId.digest` pair handed to a new
//!   browsing context
//! - [`GrantPayload`] - the JSON record sealed inside a stash entry
//! - [`SealKey`] - ChaCha20-Poly1305 key for sealing payloads

pub mod error;
pub mod payload;
pub mod seal;
pub mod token;
pub mod types;

pub use error::CoreError;
pub use payload::{GrantPayload, GRANT_SOURCE};
pub use seal::SealKey;
pub use token::GrantToken;
pub use types::{ShortId, TokenDigest};
