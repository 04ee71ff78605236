//! The App: unified API for the course viewer shell.
//!
//! Owns the catalog, the webhook clients, and the granter, and exposes the
//! operations a rendering surface drives: start (chrome + access gate),
//! lesson opening, and both ends of the video handoff.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use lectio_grant::{Granter, RedeemedGrant};
use lectio_stash::Stash;

use crate::catalog::Catalog;
use crate::chrome::MiniAppChrome;
use crate::config::AppConfig;
use crate::content::{LessonContent, LessonContentClient};
use crate::error::{AppError, Result};
use crate::gate::{AccessClient, AccessDecision};

/// Route of the standalone handoff page.
pub const VIDEO_ROUTE: &str = "/video";

/// Fallback viewer identity when the host reports no user.
const ANONYMOUS_VIEWER: &str = "anonymous";

/// What the splash screen should do, produced only AFTER the access check
/// has resolved: the progress animation is sequenced strictly behind the
/// gate, never concurrent with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashPlan {
    /// The gate's verdict (gate failures collapse to `Denied`).
    pub decision: AccessDecision,
    /// How long the progress bar animates.
    pub animation: Duration,
    /// Pause between the bar completing and the shell (or denial) appearing.
    pub settle: Duration,
}

/// A lesson opened from the catalog, with whatever content resolved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonView {
    pub module_id: u32,
    pub module_title: String,
    pub lesson_title: String,
    /// `None` when the endpoint had no record for this lesson ("coming soon").
    pub content: Option<LessonContent>,
}

/// Outcome of redeeming a handoff token.
///
/// Every failure shape except expiry is the single `Invalid` outcome, so the
/// result never discloses why a token was rejected. `Expired` carries the
/// payload so the message can be precise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// Grant is fresh; render the player on this URL.
    Ready { url: String, grant: RedeemedGrant },
    /// Grant decrypted fine but the window has passed.
    Expired { grant: RedeemedGrant },
    /// Missing, malformed, unknown, or tampered token.
    Invalid,
}

/// The main App struct.
///
/// Generic over the stash backend and the chrome capability so the shell
/// never touches a platform global.
///
/// Every async operation returns its result instead of writing into shared
/// state, so a resolution arriving after the caller has dropped the future's
/// receiver is inherently a no-op.
pub struct App<S: Stash, C: MiniAppChrome> {
    config: AppConfig,
    catalog: Catalog,
    chrome: C,
    viewer: Option<String>,
    gate: AccessClient,
    content: LessonContentClient,
    granter: Granter<S>,
}

impl<S: Stash, C: MiniAppChrome> App<S, C> {
    /// Create an app shell.
    ///
    /// `viewer` is the host-reported user id, if any; minting falls back to
    /// an anonymous identity, but the access gate denies outright without one.
    pub fn new(
        config: AppConfig,
        catalog: Catalog,
        stash: Arc<S>,
        chrome: C,
        viewer: Option<String>,
    ) -> Self {
        let http = reqwest::Client::new();
        let gate = AccessClient::with_client(http.clone(), config.access_url.clone());
        let content = LessonContentClient::with_client(http, config.content_url.clone());
        let granter = Granter::new(stash, config.grant.clone());

        Self {
            config,
            catalog,
            chrome,
            viewer,
            gate,
            content,
            granter,
        }
    }

    /// The curriculum.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The viewer identity used for minting.
    pub fn viewer_id(&self) -> &str {
        self.viewer.as_deref().unwrap_or(ANONYMOUS_VIEWER)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Startup
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply chrome and resolve the access gate.
    ///
    /// Returns only once the access decision is known — the caller starts the
    /// splash animation from the returned plan, so the animation can never
    /// begin before the check resolves. A gate failure is logged and maps to
    /// `Denied`; it is never fatal to the shell.
    pub async fn start(&self) -> SplashPlan {
        self.chrome.set_header_color(&self.config.header_color);
        self.chrome.set_background_color(&self.config.background_color);
        self.chrome.expand();

        let decision = match self.gate.check(self.viewer.as_deref()).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!(error = %e, "access check failed, denying");
                AccessDecision::Denied
            }
        };

        SplashPlan {
            decision,
            animation: self.config.splash_animation,
            settle: self.config.splash_settle,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lessons
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a lesson: catalog lookup plus content resolution.
    ///
    /// `lesson_index` is 0-based; the content endpoint is addressed with the
    /// 1-based lesson number.
    pub async fn open_lesson(&self, module_id: u32, lesson_index: usize) -> Result<LessonView> {
        let module = self
            .catalog
            .module(module_id)
            .ok_or(AppError::UnknownModule(module_id))?;
        let lesson = module
            .lessons
            .get(lesson_index)
            .ok_or(AppError::UnknownLesson {
                module: module_id,
                index: lesson_index,
            })?;

        let lesson_number = lesson_index as u32 + 1;
        let content = self.content.fetch(module_id, lesson_number).await?;

        Ok(LessonView {
            module_id,
            module_title: module.title.clone(),
            lesson_title: lesson.title.clone(),
            content,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Handoff
    // ─────────────────────────────────────────────────────────────────────────

    /// Mint a grant for a video URL and build the handoff route.
    ///
    /// The stash entry exists before this returns; the new browsing context
    /// can redeem immediately.
    pub async fn browser_handoff(&self, url: &str) -> Result<String> {
        let token = self.granter.mint(url, self.viewer_id()).await?;
        debug!("minted handoff route");
        Ok(format!("{VIDEO_ROUTE}?token={token}"))
    }

    /// Redeem the `token` query parameter of the handoff page.
    pub async fn redeem_handoff(&self, token: Option<&str>) -> Result<HandoffOutcome> {
        let Some(token) = token else {
            return Ok(HandoffOutcome::Invalid);
        };

        Ok(match self.granter.redeem(token).await? {
            Some(grant) if grant.is_valid => HandoffOutcome::Ready {
                url: grant.url.clone(),
                grant,
            },
            Some(grant) => HandoffOutcome::Expired { grant },
            None => HandoffOutcome::Invalid,
        })
    }
}
