//! Strong type definitions for the grant handoff.
//!
//! Identifiers and digests are newtypes to prevent misuse at compile time.

use std::fmt;

use rand::RngCore;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A 4-byte grant identifier, rendered as 8 lowercase hex characters.
///
/// Generated from a cryptographically-random source at mint time. The hex
/// form is the stash key suffix and the first half of the wire token, so two
/// mints of the same inputs always produce distinct ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortId(pub [u8; 4]);

impl ShortId {
    /// Generate a new random short id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert to the 8-character hex string used on the wire.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from the 8-character hex wire form.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        if s.len() != 8 {
            return Err(CoreError::InvalidShortId(format!(
                "expected 8 hex chars, got {}",
                s.len()
            )));
        }
        let bytes =
            hex::decode(s).map_err(|e| CoreError::InvalidShortId(e.to_string()))?;
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.to_hex())
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for ShortId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Serialized as the hex string so the JSON payload matches the wire form.
impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = ShortId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an 8-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShortId, E> {
                ShortId::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// A truncated integrity digest: the first 4 bytes of
/// `Blake3(sealed_blob || short_id_hex)`, rendered as 8 hex characters.
///
/// Truncation to 32 bits means this digest deters casual tampering but is NOT
/// cryptographically binding; there is also no server-held secret in the
/// computation. Both properties are part of the handoff contract and must not
/// be silently strengthened.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenDigest(pub [u8; 4]);

impl TokenDigest {
    /// Compute the digest over a sealed blob and its short id.
    pub fn compute(sealed_blob: &str, short_id: &ShortId) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(sealed_blob.as_bytes());
        hasher.update(short_id.to_hex().as_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&hash.as_bytes()[..4]);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert to the 8-character hex wire form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from the 8-character hex wire form.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        if s.len() != 8 {
            return Err(CoreError::InvalidDigest(format!(
                "expected 8 hex chars, got {}",
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidDigest(e.to_string()))?;
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for TokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenDigest({})", self.to_hex())
    }
}

impl fmt::Display for TokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
