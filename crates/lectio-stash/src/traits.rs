//! Stash trait: the abstract interface for volatile grant storage.
//!
//! This trait allows the granter to be storage-agnostic. The reference
//! implementation is in-memory; a rendering surface supplies whatever the
//! target platform offers for same-tab, cross-navigation scratch storage.

use async_trait::async_trait;

use lectio_core::ShortId;

use crate::error::Result;

/// Build the stash key for a grant's sealed blob.
///
/// The `video_token_` prefix is part of the handoff contract; the redeemer in
/// the new browsing context reconstructs the same key from the token's short
/// id.
pub fn grant_key(short_id: &ShortId) -> String {
    format!("video_token_{}", short_id.to_hex())
}

/// The Stash trait: async interface for volatile key-value storage.
///
/// # Design Notes
///
/// - **Possible-miss reads**: The backing store can be cleared externally
///   (tab close) at any time. `get` returning `None` is a normal outcome,
///   never a backend error.
/// - **Last-write-wins**: `put` overwrites silently; short-id collisions are
///   vanishingly rare and the newer grant is the one being handed off.
/// - **Best-effort removal**: `remove` on an absent key is a no-op.
#[async_trait]
pub trait Stash: Send + Sync {
    /// Store a value under a key, overwriting any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value for a key, if present.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Remove a key. Absent keys are ignored.
    async fn remove(&self, key: &str) -> Result<()>;
}
