//! # Lectio
//!
//! The unified API for a Mini App course viewer: a fixed curriculum of
//! modules and lessons, a remote access gate, lesson content resolution, and
//! a short-lived video grant handoff into a custom player.
//!
//! ## Overview
//!
//! - **Catalog**: static, read-only modules and lessons
//! - **Access gate**: one opaque allow/deny from a remote webhook at startup
//! - **Content resolver**: (module, lesson) → optional video and mind-map URLs
//! - **Grant handoff**: URL + viewer → opaque token → new browsing context →
//!   URL again, subject to integrity and a very short expiry
//! - **Player**: event-driven playback state machine over injected capabilities
//!
//! ## Core flow
//!
//! ```text
//! resolver → URL → mint → token → new browsing context → redeem → URL → player
//! ```
//!
//! The shell never touches platform globals: the Mini App environment is an
//! injected [`MiniAppChrome`] capability, storage is an injected
//! [`Stash`](lectio_stash::Stash), and the player drives injected surface
//! capabilities.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lectio::{App, AppConfig, Catalog, NoopChrome};
//! use lectio::stash::MemoryStash;
//!
//! async fn example() {
//!     let config = AppConfig::new(
//!         "https://hooks.example/access",
//!         "https://hooks.example/content",
//!     );
//!     let app = App::new(
//!         config,
//!         Catalog::default(),
//!         Arc::new(MemoryStash::new()),
//!         NoopChrome,
//!         Some("42".to_string()),
//!     );
//!
//!     let plan = app.start().await;
//!     if plan.decision.is_allowed() {
//!         let view = app.open_lesson(1, 0).await.unwrap();
//!         if let Some(url) = view.content.and_then(|c| c.video_url) {
//!             let route = app.browser_handoff(&url).await.unwrap();
//!             // open `route` in a new browsing context...
//!         }
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `lectio::core` - wire primitives (tokens, payloads, seals)
//! - `lectio::stash` - the volatile key-value stash
//! - `lectio::grant` - minting and redeeming
//! - `lectio::player` - the playback engine

pub mod app;
pub mod catalog;
pub mod chrome;
pub mod config;
pub mod content;
pub mod error;
pub mod gate;

// Re-export component crates
pub use lectio_core as core;
pub use lectio_grant as grant;
pub use lectio_player as player;
pub use lectio_stash as stash;

// Re-export main types for convenience
pub use app::{App, HandoffOutcome, LessonView, SplashPlan, VIDEO_ROUTE};
pub use catalog::{Catalog, Lesson, Module};
pub use chrome::{MiniAppChrome, NoopChrome};
pub use config::AppConfig;
pub use content::{LessonContent, LessonContentClient};
pub use error::{AppError, Result};
pub use gate::{AccessClient, AccessDecision};

// Re-export commonly used component types
pub use lectio_core::{GrantPayload, GrantToken, SealKey, ShortId};
pub use lectio_grant::{GrantConfig, Granter, RedeemedGrant};
pub use lectio_player::{MediaEvent, Orientation, PlaybackState, PlayerEngine, Speed};
