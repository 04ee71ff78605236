//! Playback state owned by the engine.

use std::fmt;

/// The closed set of selectable playback speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
}

impl Speed {
    /// Every selectable speed, menu order.
    pub const ALL: [Speed; 5] = [
        Speed::Half,
        Speed::Normal,
        Speed::OneAndQuarter,
        Speed::OneAndHalf,
        Speed::Double,
    ];

    /// The playback rate applied to the media element.
    pub fn value(&self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::OneAndQuarter => 1.25,
            Speed::OneAndHalf => 1.5,
            Speed::Double => 2.0,
        }
    }

    /// Map a raw rate back into the set. Anything outside it is rejected.
    pub fn from_value(value: f64) -> Option<Speed> {
        Speed::ALL.into_iter().find(|s| s.value() == value)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.value())
    }
}

/// The observable state of one player instance.
///
/// Owned exclusively by the [`PlayerEngine`](crate::engine::PlayerEngine)
/// bound to one media element; dropped with it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the element reports itself playing.
    pub is_playing: bool,
    /// Whether the player container is fullscreen.
    pub is_fullscreen: bool,
    /// Seek-bar fill, 0..=100. Stays 0 until metadata loads.
    pub progress_percent: f64,
    /// Media duration in seconds; 0 while unknown.
    pub duration_secs: f64,
    /// Selected playback speed.
    pub speed: Speed,
    /// Whether the speed-selection menu is open.
    pub speed_menu_open: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_fullscreen: false,
            progress_percent: 0.0,
            duration_secs: 0.0,
            speed: Speed::default(),
            speed_menu_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_set_is_closed() {
        assert_eq!(Speed::from_value(0.5), Some(Speed::Half));
        assert_eq!(Speed::from_value(1.0), Some(Speed::Normal));
        assert_eq!(Speed::from_value(1.25), Some(Speed::OneAndQuarter));
        assert_eq!(Speed::from_value(1.5), Some(Speed::OneAndHalf));
        assert_eq!(Speed::from_value(2.0), Some(Speed::Double));

        assert_eq!(Speed::from_value(3.0), None);
        assert_eq!(Speed::from_value(0.0), None);
        assert_eq!(Speed::from_value(1.0000001), None);
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert!(!state.is_fullscreen);
        assert_eq!(state.progress_percent, 0.0);
        assert_eq!(state.duration_secs, 0.0);
        assert_eq!(state.speed, Speed::Normal);
    }
}
