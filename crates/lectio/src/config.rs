//! Configuration for the app shell.

use std::time::Duration;

use lectio_grant::GrantConfig;

/// Header bar color applied at startup.
pub const DEFAULT_HEADER_COLOR: &str = "#1a1a25";

/// Page background color applied at startup.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0a0a0f";

/// How long the splash progress bar animates once the access check resolves.
pub const DEFAULT_SPLASH_ANIMATION_MS: u64 = 2_000;

/// Pause between the bar completing and the shell appearing.
pub const DEFAULT_SPLASH_SETTLE_MS: u64 = 500;

/// Configuration for the app shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Access-check webhook; queried as `GET {url}?userId={id}`.
    pub access_url: String,

    /// Lesson-content webhook; queried as `POST {url}` with a JSON body.
    pub content_url: String,

    /// Header bar color.
    pub header_color: String,

    /// Page background color.
    pub background_color: String,

    /// Splash progress-bar animation length.
    pub splash_animation: Duration,

    /// Splash settle pause after the bar completes.
    pub splash_settle: Duration,

    /// Grant minting/redeeming configuration.
    pub grant: GrantConfig,
}

impl AppConfig {
    /// Config for the given webhook endpoints, everything else defaulted.
    pub fn new(access_url: impl Into<String>, content_url: impl Into<String>) -> Self {
        Self {
            access_url: access_url.into(),
            content_url: content_url.into(),
            header_color: DEFAULT_HEADER_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            splash_animation: Duration::from_millis(DEFAULT_SPLASH_ANIMATION_MS),
            splash_settle: Duration::from_millis(DEFAULT_SPLASH_SETTLE_MS),
            grant: GrantConfig::default(),
        }
    }

    /// Override the grant configuration.
    pub fn grant(mut self, grant: GrantConfig) -> Self {
        self.grant = grant;
        self
    }
}
