//! The playback engine state machine.

use tracing::{debug, warn};

use crate::event::{MediaEvent, Orientation};
use crate::state::{PlaybackState, Speed};
use crate::traits::{FullscreenController, MediaSurface};

/// Drives one media element through its playback lifecycle.
///
/// Requests flow out through the capability traits; truth flows back in
/// through [`MediaEvent`]s. The engine never flips `is_playing` or
/// `is_fullscreen` on its own request paths, so a rejected or still-in-flight
/// request cannot desynchronize state from the element.
pub struct PlayerEngine<M, F> {
    media: M,
    fullscreen: F,
    state: PlaybackState,
    has_started: bool,
}

impl<M: MediaSurface, F: FullscreenController> PlayerEngine<M, F> {
    /// Create an engine over the given capabilities, in the idle state.
    pub fn new(media: M, fullscreen: F) -> Self {
        Self {
            media,
            fullscreen,
            state: PlaybackState::default(),
            has_started: false,
        }
    }

    /// Current playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The media surface reference.
    pub fn surface(&self) -> &M {
        &self.media
    }

    /// The fullscreen controller reference.
    pub fn fullscreen(&self) -> &F {
        &self.fullscreen
    }

    /// Whether playback has ever started on this element.
    ///
    /// Latched by the first observed `Play` event; the handoff view reads it
    /// to warn before an accidental page unload.
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Requests (advisory; state changes arrive as events)
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggle between playing and paused.
    ///
    /// A rejected play request (autoplay policy) is logged and leaves state
    /// untouched.
    pub async fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.media.pause();
        } else if let Err(e) = self.media.play().await {
            warn!(error = %e, "play request rejected");
        }
    }

    /// Seek to a fractional position in `[0, 1]`.
    ///
    /// Sets the element position and updates the seek-bar fill optimistically
    /// instead of waiting for the next time-update tick. A no-op while the
    /// duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        if self.state.duration_secs <= 0.0 {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.media.set_position(fraction * self.state.duration_secs);
        self.state.progress_percent = fraction * 100.0;
    }

    /// Select a playback rate.
    ///
    /// Only values in the enumerated speed set apply; anything else is
    /// ignored. Applying a speed closes the speed menu.
    pub fn set_speed(&mut self, value: f64) {
        let Some(speed) = Speed::from_value(value) else {
            warn!(value, "ignoring unsupported playback rate");
            return;
        };
        self.media.set_rate(speed.value());
        self.state.speed = speed;
        self.state.speed_menu_open = false;
    }

    /// Open or close the speed-selection menu.
    pub fn toggle_speed_menu(&mut self) {
        self.state.speed_menu_open = !self.state.speed_menu_open;
    }

    /// Request entering or leaving fullscreen.
    ///
    /// The flag is resynchronized from the actual document state when the
    /// change event arrives, never from the request outcome.
    pub async fn toggle_fullscreen(&mut self) {
        let result = if self.state.is_fullscreen {
            self.fullscreen.exit().await
        } else {
            self.fullscreen.enter().await
        };
        if let Err(e) = result {
            warn!(error = %e, "fullscreen toggle failed");
        }
    }

    /// React to a device orientation change.
    ///
    /// Landscape auto-enters fullscreen, portrait auto-exits. Advisory:
    /// failures are logged and nothing else happens.
    pub async fn handle_orientation(&mut self, orientation: Orientation) {
        let result = match orientation {
            Orientation::Landscape if !self.state.is_fullscreen => {
                self.fullscreen.enter().await
            }
            Orientation::Portrait if self.state.is_fullscreen => {
                self.fullscreen.exit().await
            }
            _ => return,
        };
        if let Err(e) = result {
            warn!(error = %e, ?orientation, "orientation fullscreen change failed");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events (authoritative)
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply an event reported by the rendering surface.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => {
                if !self.has_started {
                    self.has_started = true;
                    debug!("playback started");
                }
                self.state.is_playing = true;
            }
            MediaEvent::Pause => {
                self.state.is_playing = false;
            }
            MediaEvent::TimeUpdate { position_secs } => {
                self.state.progress_percent = if self.state.duration_secs > 0.0 {
                    (position_secs / self.state.duration_secs * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };
            }
            MediaEvent::LoadedMetadata { duration_secs } => {
                self.state.duration_secs = if duration_secs.is_finite() && duration_secs > 0.0
                {
                    duration_secs
                } else {
                    0.0
                };
            }
            MediaEvent::FullscreenChange { active } => {
                self.state.is_fullscreen = active;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::scripted::{
        FullscreenCall, ScriptedFullscreen, ScriptedSurface, SurfaceCall,
    };

    fn engine() -> PlayerEngine<ScriptedSurface, ScriptedFullscreen> {
        PlayerEngine::new(ScriptedSurface::new(), ScriptedFullscreen::new())
    }

    #[tokio::test]
    async fn test_play_pause_follow_element_events() {
        let mut engine = engine();

        engine.toggle_play().await;
        // Request sent, but state waits for the element's own event.
        assert_eq!(engine.surface().calls(), vec![SurfaceCall::Play]);
        assert!(!engine.state().is_playing);

        engine.handle_event(MediaEvent::Play);
        assert!(engine.state().is_playing);

        engine.toggle_play().await;
        assert_eq!(
            engine.surface().calls(),
            vec![SurfaceCall::Play, SurfaceCall::Pause]
        );
        assert!(engine.state().is_playing); // still playing until the event

        engine.handle_event(MediaEvent::Pause);
        assert!(!engine.state().is_playing);
    }

    #[tokio::test]
    async fn test_rejected_play_leaves_state_untouched() {
        let mut engine = engine();
        engine.surface().reject_play(true);

        engine.toggle_play().await;
        assert!(!engine.state().is_playing);
        assert!(!engine.has_started());
    }

    #[tokio::test]
    async fn test_rapid_toggle_with_request_in_flight() {
        let mut engine = engine();

        // Two toggles before any element event: both become play requests;
        // the flag only moves when events arrive.
        engine.toggle_play().await;
        engine.toggle_play().await;
        assert_eq!(
            engine.surface().calls(),
            vec![SurfaceCall::Play, SurfaceCall::Play]
        );

        engine.handle_event(MediaEvent::Play);
        engine.handle_event(MediaEvent::Pause);
        assert!(!engine.state().is_playing);
    }

    #[test]
    fn test_seek_midpoint() {
        let mut engine = engine();
        engine.handle_event(MediaEvent::LoadedMetadata { duration_secs: 200.0 });

        engine.seek(0.5);
        assert_eq!(engine.state().progress_percent, 50.0);
        assert_eq!(
            engine.surface().calls(),
            vec![SurfaceCall::SetPosition(100.0)]
        );
    }

    #[tokio::test]
    async fn test_seek_ignores_play_state() {
        let mut engine = engine();
        engine.handle_event(MediaEvent::LoadedMetadata { duration_secs: 200.0 });
        engine.handle_event(MediaEvent::Play);

        engine.seek(0.5);
        assert_eq!(engine.state().progress_percent, 50.0);
        assert!(engine.state().is_playing);
    }

    #[test]
    fn test_seek_clamps_fraction() {
        let mut engine = engine();
        engine.handle_event(MediaEvent::LoadedMetadata { duration_secs: 100.0 });

        engine.seek(1.5);
        assert_eq!(engine.state().progress_percent, 100.0);
        engine.seek(-0.5);
        assert_eq!(engine.state().progress_percent, 0.0);

        assert_eq!(
            engine.surface().calls(),
            vec![SurfaceCall::SetPosition(100.0), SurfaceCall::SetPosition(0.0)]
        );
    }

    #[test]
    fn test_seek_without_metadata_is_noop() {
        let mut engine = engine();

        engine.seek(0.5);
        assert_eq!(engine.state().progress_percent, 0.0);
        assert!(engine.surface().calls().is_empty());
    }

    #[test]
    fn test_progress_stays_zero_until_metadata() {
        let mut engine = engine();

        engine.handle_event(MediaEvent::TimeUpdate { position_secs: 12.0 });
        assert_eq!(engine.state().progress_percent, 0.0);

        engine.handle_event(MediaEvent::LoadedMetadata { duration_secs: 48.0 });
        engine.handle_event(MediaEvent::TimeUpdate { position_secs: 12.0 });
        assert_eq!(engine.state().progress_percent, 25.0);
    }

    #[test]
    fn test_set_speed_applies_and_closes_menu() {
        let mut engine = engine();
        engine.toggle_speed_menu();
        assert!(engine.state().speed_menu_open);

        engine.set_speed(1.5);
        assert_eq!(engine.state().speed, Speed::OneAndHalf);
        assert!(!engine.state().speed_menu_open);
        assert_eq!(engine.surface().calls(), vec![SurfaceCall::SetRate(1.5)]);
    }

    #[test]
    fn test_set_speed_rejects_values_outside_set() {
        let mut engine = engine();

        engine.set_speed(3.0);
        assert_eq!(engine.state().speed, Speed::Normal);
        assert!(engine.surface().calls().is_empty());
    }

    #[tokio::test]
    async fn test_fullscreen_flag_follows_change_event() {
        let mut engine = engine();

        engine.toggle_fullscreen().await;
        assert_eq!(engine.fullscreen().calls(), vec![FullscreenCall::Enter]);
        assert!(!engine.state().is_fullscreen); // request alone changes nothing

        engine.handle_event(MediaEvent::FullscreenChange { active: true });
        assert!(engine.state().is_fullscreen);

        engine.toggle_fullscreen().await;
        assert_eq!(
            engine.fullscreen().calls(),
            vec![FullscreenCall::Enter, FullscreenCall::Exit]
        );
        engine.handle_event(MediaEvent::FullscreenChange { active: false });
        assert!(!engine.state().is_fullscreen);
    }

    #[tokio::test]
    async fn test_orientation_auto_fullscreen() {
        let mut engine = engine();

        engine.handle_orientation(Orientation::Landscape).await;
        assert_eq!(engine.fullscreen().calls(), vec![FullscreenCall::Enter]);

        engine.handle_event(MediaEvent::FullscreenChange { active: true });

        // Already fullscreen: landscape again does nothing.
        engine.handle_orientation(Orientation::Landscape).await;
        assert_eq!(engine.fullscreen().calls(), vec![FullscreenCall::Enter]);

        engine.handle_orientation(Orientation::Portrait).await;
        assert_eq!(
            engine.fullscreen().calls(),
            vec![FullscreenCall::Enter, FullscreenCall::Exit]
        );
    }

    #[tokio::test]
    async fn test_orientation_failures_are_nonfatal() {
        let mut engine = engine();
        engine.fullscreen().fail(true);

        engine.handle_orientation(Orientation::Landscape).await;
        assert!(!engine.state().is_fullscreen);
    }

    #[test]
    fn test_has_started_latches_on_first_play() {
        let mut engine = engine();
        assert!(!engine.has_started());

        engine.handle_event(MediaEvent::Play);
        engine.handle_event(MediaEvent::Pause);
        assert!(engine.has_started());
    }
}
