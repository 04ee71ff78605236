//! # Lectio Stash
//!
//! The volatile, tab-scoped key-value store bridging the main view and the
//! handoff view. A stash entry lives at most as long as the browsing session;
//! it can be cleared externally at any time, so every read is a possible miss
//! and never a hard dependency.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StashError;
pub use memory::MemoryStash;
pub use traits::{grant_key, Stash};
