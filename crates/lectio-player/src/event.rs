//! Events fed into the engine by the rendering surface.

/// Media element events.
///
/// `Play` and `Pause` come from the element itself, not from our requests:
/// a play request that is rejected emits nothing, and an external pause
/// (e.g. OS media controls) still reaches the engine. This is what keeps the
/// playing flag honest under rapid toggling with a request in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// The element started playing.
    Play,
    /// The element paused.
    Pause,
    /// Periodic position report while playing.
    TimeUpdate {
        /// Current position in seconds.
        position_secs: f64,
    },
    /// Media metadata became available.
    LoadedMetadata {
        /// Total duration in seconds.
        duration_secs: f64,
    },
    /// The document's fullscreen state changed (any vendor-prefixed event,
    /// already normalized by the surface).
    FullscreenChange {
        /// Whether some element is now fullscreen.
        active: bool,
    },
}

/// Device orientation, as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}
