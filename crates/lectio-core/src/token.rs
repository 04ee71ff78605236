//! The wire token handed to a new browsing context.
//!
//! A token is `shortId.digest`, URL-escaped. It reveals neither the URL nor
//! the viewer id; the actual payload travels through the stash.

use std::fmt;

use crate::error::CoreError;
use crate::types::{ShortId, TokenDigest};

/// A minted grant token: the stash lookup key plus its integrity digest.
///
/// Immutable once minted. Consumed (logically) once by the redeemer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantToken {
    pub short_id: ShortId,
    pub digest: TokenDigest,
}

impl GrantToken {
    /// Create a token from its parts.
    pub fn new(short_id: ShortId, digest: TokenDigest) -> Self {
        Self { short_id, digest }
    }

    /// Encode to the URL-escaped wire form.
    pub fn encode(&self) -> String {
        let raw = format!("{}.{}", self.short_id.to_hex(), self.digest.to_hex());
        urlencoding::encode(&raw).into_owned()
    }

    /// Parse the URL-escaped wire form.
    ///
    /// Splits on the FIRST `.`; anything that does not decode into an 8-hex
    /// short id and an 8-hex digest is malformed.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let decoded = urlencoding::decode(raw)
            .map_err(|e| CoreError::MalformedToken(e.to_string()))?;

        let (id_part, digest_part) = decoded
            .split_once('.')
            .ok_or_else(|| CoreError::MalformedToken("missing '.' separator".into()))?;

        Ok(Self {
            short_id: ShortId::from_hex(id_part)?,
            digest: TokenDigest::from_hex(digest_part)?,
        })
    }
}

impl fmt::Display for GrantToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.short_id.to_hex(), self.digest.to_hex())
    }
}
