//! The Mini App chrome capability.
//!
//! The hosting environment exposes a global object for window chrome; the
//! shell only ever sees this trait, injected at startup.

/// Window chrome controls offered by the Mini App host.
pub trait MiniAppChrome: Send + Sync {
    /// Expand the web view to full height.
    fn expand(&self);

    /// Set the header bar color (CSS hex).
    fn set_header_color(&self, color: &str);

    /// Set the page background color (CSS hex).
    fn set_background_color(&self, color: &str);
}

/// A chrome that does nothing, for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChrome;

impl MiniAppChrome for NoopChrome {
    fn expand(&self) {}
    fn set_header_color(&self, _color: &str) {}
    fn set_background_color(&self, _color: &str) {}
}
