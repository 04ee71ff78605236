//! Minting and redeeming video grants.
//!
//! Mint: timestamp → random short id → sealed JSON payload → integrity
//! digest → stash write → wire token. The stash write completes before the
//! token exists anywhere, because the redeemer in the new browsing context
//! depends on the entry being present.
//!
//! Redeem: parse → stash lookup → digest check → open → parse → expiry.

use std::sync::Arc;

use tracing::{debug, warn};

use lectio_core::{GrantPayload, GrantToken, ShortId, TokenDigest};
use lectio_stash::{grant_key, Stash};

use crate::config::GrantConfig;
use crate::error::{GrantError, Result};

/// A redeemed grant: the sealed payload plus the expiry verdict.
///
/// Returned even when expired, so the caller can present a precise message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemedGrant {
    /// The video URL the grant unlocks.
    pub url: String,
    /// The viewer the grant was minted for.
    pub user_id: String,
    /// Origin tag from the payload.
    pub source: String,
    /// Mint time, Unix milliseconds.
    pub timestamp: i64,
    /// The id the grant was stashed under.
    pub short_id: ShortId,
    /// Whether the grant is within its expiry window.
    pub is_valid: bool,
}

impl RedeemedGrant {
    fn from_payload(payload: GrantPayload, is_valid: bool) -> Self {
        Self {
            url: payload.url,
            user_id: payload.user_id,
            source: payload.source,
            timestamp: payload.timestamp,
            short_id: payload.short_id,
            is_valid,
        }
    }
}

/// Mints and redeems grants against an injected stash.
pub struct Granter<S: Stash> {
    stash: Arc<S>,
    config: GrantConfig,
}

impl<S: Stash> Granter<S> {
    /// Create a granter over a shared stash.
    pub fn new(stash: Arc<S>, config: GrantConfig) -> Self {
        Self { stash, config }
    }

    /// Get the stash reference.
    pub fn stash(&self) -> &S {
        &self.stash
    }

    /// Mint a token for a video URL and viewer identity.
    ///
    /// The sealed payload is stashed under `video_token_{shortId}` BEFORE the
    /// token is returned. Two mints of identical inputs produce different
    /// tokens (fresh random id, fresh timestamp, fresh seal nonce).
    pub async fn mint(&self, url: &str, user_id: &str) -> Result<String> {
        let timestamp = now_millis();
        let short_id = ShortId::generate();

        let payload = GrantPayload::new(url, user_id, timestamp, short_id);
        let sealed = self.config.key.seal(payload.to_json()?.as_bytes())?;
        let digest = TokenDigest::compute(&sealed, &short_id);

        // The stash value is the sealed blob wrapped as a JSON string.
        let wrapped = serde_json::to_string(&sealed)
            .map_err(|e| GrantError::Serialization(e.to_string()))?;
        self.stash.put(&grant_key(&short_id), &wrapped).await?;

        debug!(%short_id, "minted video grant");
        Ok(GrantToken::new(short_id, digest).encode())
    }

    /// Redeem a wire token for its payload.
    ///
    /// Returns `Ok(None)` for every invalid-token cause: malformed token,
    /// missing stash entry, digest mismatch, unopenable or unparseable blob.
    /// An expired grant is returned with `is_valid = false`, and its stash
    /// entry is removed (best-effort, at most once per observation).
    pub async fn redeem(&self, raw_token: &str) -> Result<Option<RedeemedGrant>> {
        let token = match GrantToken::parse(raw_token) {
            Ok(token) => token,
            Err(e) => {
                debug!(error = %e, "rejecting malformed token");
                return Ok(None);
            }
        };

        let key = grant_key(&token.short_id);
        let Some(wrapped) = self.stash.get(&key).await? else {
            debug!(short_id = %token.short_id, "no stash entry for token");
            return Ok(None);
        };

        let sealed: String = match serde_json::from_str(&wrapped) {
            Ok(sealed) => sealed,
            Err(e) => {
                debug!(error = %e, "stash entry is not a JSON-wrapped blob");
                return Ok(None);
            }
        };

        if TokenDigest::compute(&sealed, &token.short_id) != token.digest {
            debug!(short_id = %token.short_id, "digest mismatch");
            return Ok(None);
        }

        let plaintext = match self.config.key.open(&sealed) {
            Ok(plaintext) => plaintext,
            Err(e) => {
                debug!(error = %e, "sealed blob failed to open");
                return Ok(None);
            }
        };
        let payload = match GrantPayload::from_json(&plaintext) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "payload failed to parse");
                return Ok(None);
            }
        };

        let age_ms = now_millis() - payload.timestamp;
        let is_valid = age_ms < self.config.expiry.as_millis() as i64;

        if !is_valid {
            // One-shot expiry enforcement; a failed removal just leaves the
            // entry for the session teardown to collect.
            if let Err(e) = self.stash.remove(&key).await {
                warn!(error = %e, short_id = %token.short_id, "failed to remove expired grant");
            }
            debug!(short_id = %token.short_id, age_ms, "grant expired");
        }

        Ok(Some(RedeemedGrant::from_payload(payload, is_valid)))
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
