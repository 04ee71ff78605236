//! Configuration for minting and redeeming grants.

use std::time::Duration;

use lectio_core::SealKey;

/// Default grant lifetime, in milliseconds.
///
/// Three seconds covers an immediate same-device tab open and nothing else:
/// the token is a handoff, not a shareable link. A slow device can miss the
/// window; widening it trades replay exposure for reliability.
pub const DEFAULT_EXPIRY_MS: u64 = 3_000;

/// The embedded sealing key shared by both ends of the handoff.
///
/// Being a compiled-in constant, it obfuscates rather than protects; see
/// [`SealKey`] for the contract implications.
const EMBEDDED_SEAL_KEY: [u8; 32] = *b"lectio-embedded-seal-key-0000001";

/// Grant configuration.
#[derive(Debug, Clone)]
pub struct GrantConfig {
    /// Key used to seal and open grant payloads.
    pub key: SealKey,

    /// How long a minted grant stays redeemable.
    pub expiry: Duration,
}

impl Default for GrantConfig {
    fn default() -> Self {
        Self {
            key: SealKey::from_bytes(EMBEDDED_SEAL_KEY),
            expiry: Duration::from_millis(DEFAULT_EXPIRY_MS),
        }
    }
}

impl GrantConfig {
    /// Config with a specific key and the default expiry.
    pub fn with_key(key: SealKey) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Override the expiry window.
    pub fn expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }
}
