//! In-memory implementation of the Stash trait.
//!
//! The reference backend: same semantics as a browser tab's session storage,
//! with `clear` standing in for the tab being closed.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Stash;

/// In-memory stash implementation.
///
/// All data is lost when the stash is dropped. Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryStash {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStash {
    /// Create a new empty in-memory stash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry, modeling the browsing session ending.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the stash is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

#[async_trait]
impl Stash for MemoryStash {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.read().unwrap().get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.write().unwrap().remove(key);
        Ok(())
    }
}
