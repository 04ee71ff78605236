//! Capability traits the engine drives.
//!
//! A rendering surface adapts these onto whatever the platform offers (a
//! browser video element, vendor-prefixed fullscreen APIs). The engine only
//! ever sees the traits.

use async_trait::async_trait;

use crate::error::Result;

/// The media element capability.
///
/// `play` is asynchronous and may be rejected by platform policy; everything
/// else applies synchronously. None of these report back into engine state —
/// the surface echoes real state changes as [`MediaEvent`](crate::event::MediaEvent)s.
#[async_trait]
pub trait MediaSurface: Send + Sync {
    /// Request playback start.
    async fn play(&self) -> Result<()>;

    /// Stop playback. Always succeeds.
    fn pause(&self);

    /// Seek to an absolute position in seconds.
    fn set_position(&self, seconds: f64);

    /// Apply a playback rate.
    fn set_rate(&self, rate: f64);
}

/// Fullscreen control over the player container.
///
/// Entry/exit completion is observed via
/// [`MediaEvent::FullscreenChange`](crate::event::MediaEvent), not via these
/// requests: a request can resolve and the transition still fail, or happen
/// without any request at all.
#[async_trait]
pub trait FullscreenController: Send + Sync {
    /// Request fullscreen on the player container.
    async fn enter(&self) -> Result<()>;

    /// Request leaving fullscreen.
    async fn exit(&self) -> Result<()>;
}

/// Recording fakes for tests.
///
/// Calls are captured in order; play/fullscreen requests can be scripted to
/// fail, modeling autoplay policy and fullscreen rejection.
pub mod scripted {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{PlayerError, Result};

    /// A recorded call against a [`ScriptedSurface`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceCall {
        Play,
        Pause,
        SetPosition(f64),
        SetRate(f64),
    }

    /// A media surface that records every call.
    #[derive(Default)]
    pub struct ScriptedSurface {
        calls: Mutex<Vec<SurfaceCall>>,
        reject_play: AtomicBool,
    }

    impl ScriptedSurface {
        /// Create a surface that accepts every request.
        pub fn new() -> Self {
            Self::default()
        }

        /// Make subsequent play requests fail, like an autoplay policy.
        pub fn reject_play(&self, reject: bool) {
            self.reject_play.store(reject, Ordering::SeqCst);
        }

        /// Snapshot of the recorded calls.
        pub fn calls(&self) -> Vec<SurfaceCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl super::MediaSurface for ScriptedSurface {
        async fn play(&self) -> Result<()> {
            self.calls.lock().unwrap().push(SurfaceCall::Play);
            if self.reject_play.load(Ordering::SeqCst) {
                return Err(PlayerError::PlaybackRejected("autoplay blocked".into()));
            }
            Ok(())
        }

        fn pause(&self) {
            self.calls.lock().unwrap().push(SurfaceCall::Pause);
        }

        fn set_position(&self, seconds: f64) {
            self.calls.lock().unwrap().push(SurfaceCall::SetPosition(seconds));
        }

        fn set_rate(&self, rate: f64) {
            self.calls.lock().unwrap().push(SurfaceCall::SetRate(rate));
        }
    }

    /// A recorded call against a [`ScriptedFullscreen`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FullscreenCall {
        Enter,
        Exit,
    }

    /// A fullscreen controller that records every call.
    #[derive(Default)]
    pub struct ScriptedFullscreen {
        calls: Mutex<Vec<FullscreenCall>>,
        fail: AtomicBool,
    }

    impl ScriptedFullscreen {
        /// Create a controller that accepts every request.
        pub fn new() -> Self {
            Self::default()
        }

        /// Make subsequent requests fail.
        pub fn fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        /// Snapshot of the recorded calls.
        pub fn calls(&self) -> Vec<FullscreenCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: FullscreenCall) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail.load(Ordering::SeqCst) {
                return Err(PlayerError::Fullscreen("request rejected".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl super::FullscreenController for ScriptedFullscreen {
        async fn enter(&self) -> Result<()> {
            self.record(FullscreenCall::Enter)
        }

        async fn exit(&self) -> Result<()> {
            self.record(FullscreenCall::Exit)
        }
    }
}
