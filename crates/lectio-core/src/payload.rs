//! The grant payload sealed inside a stash entry.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ShortId;

/// Origin tag stamped into every payload minted by the Mini App.
pub const GRANT_SOURCE: &str = "telegram-webapp";

/// The record a grant token unlocks: the video URL, the viewer identity, and
/// the mint timestamp the expiry check runs against.
///
/// Serialized as JSON before sealing; field names are part of the handoff
/// wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantPayload {
    /// The video URL being handed off.
    pub url: String,

    /// The viewer's user id (or the anonymous fallback).
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Origin tag, always [`GRANT_SOURCE`] for payloads minted here.
    pub source: String,

    /// Mint time, Unix milliseconds.
    pub timestamp: i64,

    /// The short id the payload is stashed under.
    #[serde(rename = "shortId")]
    pub short_id: ShortId,
}

impl GrantPayload {
    /// Create a payload with the standard source tag.
    pub fn new(
        url: impl Into<String>,
        user_id: impl Into<String>,
        timestamp: i64,
        short_id: ShortId,
    ) -> Self {
        Self {
            url: url.into(),
            user_id: user_id.into(),
            source: GRANT_SOURCE.to_string(),
            timestamp,
            short_id,
        }
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::EncodingError(e.to_string()))
    }

    /// Deserialize from the JSON wire form.
    pub fn from_json(json: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice(json).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_roundtrip() {
        let payload = GrantPayload::new(
            "https://cdn.example/lesson.mp4",
            "12345",
            1_700_000_000_000,
            ShortId::from_bytes([0xab, 0xcd, 0xef, 0x01]),
        );

        let json = payload.to_json().unwrap();
        let recovered = GrantPayload::from_json(json.as_bytes()).unwrap();
        assert_eq!(payload, recovered);
    }

    #[test]
    fn test_payload_wire_field_names() {
        let payload = GrantPayload::new(
            "https://x/v.mp4",
            "u1",
            42,
            ShortId::from_bytes([0, 1, 2, 3]),
        );
        let json = payload.to_json().unwrap();

        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"shortId\":\"00010203\""));
        assert!(json.contains("\"source\":\"telegram-webapp\""));
    }

    #[test]
    fn test_payload_rejects_malformed_json() {
        assert!(GrantPayload::from_json(b"{\"url\": 1}").is_err());
        assert!(GrantPayload::from_json(b"not json").is_err());
    }
}
