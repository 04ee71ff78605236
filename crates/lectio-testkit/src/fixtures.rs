//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;
use std::time::Duration;

use lectio::{Catalog, Lesson, Module};
use lectio_core::SealKey;
use lectio_grant::{GrantConfig, Granter};
use lectio_player::traits::scripted::{ScriptedFullscreen, ScriptedSurface};
use lectio_player::PlayerEngine;
use lectio_stash::MemoryStash;

/// A test fixture with a shared stash and a granter over it.
pub struct TestFixture {
    pub stash: Arc<MemoryStash>,
    pub granter: Granter<MemoryStash>,
}

impl TestFixture {
    /// Create a fixture with a random key and the default expiry.
    pub fn new() -> Self {
        Self::with_config(GrantConfig::with_key(SealKey::generate()))
    }

    /// Create with a deterministic key from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_config(GrantConfig::with_key(SealKey::from_bytes(seed)))
    }

    /// Create with a specific expiry window.
    pub fn with_expiry(expiry: Duration) -> Self {
        Self::with_config(GrantConfig::with_key(SealKey::generate()).expiry(expiry))
    }

    /// Create a fixture whose every grant is already expired.
    pub fn expired() -> Self {
        Self::with_expiry(Duration::ZERO)
    }

    /// Create from an explicit grant config.
    pub fn with_config(config: GrantConfig) -> Self {
        let stash = Arc::new(MemoryStash::new());
        let granter = Granter::new(Arc::clone(&stash), config);
        Self { stash, granter }
    }

    /// A fresh player engine over recording fakes.
    pub fn player() -> PlayerEngine<ScriptedSurface, ScriptedFullscreen> {
        PlayerEngine::new(ScriptedSurface::new(), ScriptedFullscreen::new())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small two-module catalog for shell tests.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Module::new(
            0,
            "Basics",
            vec![
                Lesson::new(0, "What a mini app is"),
                Lesson::new(1, "What mini apps can do"),
            ],
        ),
        Module::new(
            1,
            "Practice",
            vec![
                Lesson::new(0, "Environment setup"),
                Lesson::new(1, "First build"),
                Lesson::new(2, "Shipping"),
            ],
        ),
    ])
}
