//! # Lectio Player
//!
//! The playback engine: a small state machine driving one media element
//! through `Idle → Playing ⇄ Paused`, with orthogonal fullscreen and speed
//! flags.
//!
//! The engine never talks to a browser directly. It drives two injected
//! capabilities — [`MediaSurface`] and [`FullscreenController`] — and
//! consumes [`MediaEvent`]s the rendering surface feeds back. The element's
//! own play/pause events are the single source of truth for the playing
//! flag; requests are advisory and may be rejected without desyncing state.

pub mod engine;
pub mod error;
pub mod event;
pub mod state;
pub mod traits;

pub use engine::PlayerEngine;
pub use error::PlayerError;
pub use event::{MediaEvent, Orientation};
pub use state::{PlaybackState, Speed};
pub use traits::{FullscreenController, MediaSurface};
