//! End-to-end handoff flow: gate → lesson → mint → redeem → playback.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lectio::player::traits::scripted::{ScriptedFullscreen, ScriptedSurface};
use lectio::stash::MemoryStash;
use lectio::{
    AccessDecision, App, AppConfig, Catalog, GrantConfig, HandoffOutcome, Lesson, MediaEvent,
    Module, NoopChrome, PlayerEngine, SealKey,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn catalog() -> Catalog {
    Catalog::new(vec![Module::new(
        1,
        "Practice",
        vec![Lesson::new(0, "Intro"), Lesson::new(1, "Deep dive")],
    )])
}

async fn mount_gate(server: &MockServer, set: &str) {
    Mock::given(method("GET"))
        .and(path("/access"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"set": set})))
        .mount(server)
        .await;
}

async fn mount_content(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/content"))
        .and(body_json(serde_json::json!({"module": 1, "lesson": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"module": 1, "lesson": 2, "url": "https://x/video.mp4", "mindmap": ""}
        ])))
        .mount(server)
        .await;
}

fn app(server: &MockServer, grant: GrantConfig) -> App<MemoryStash, NoopChrome> {
    let config = AppConfig::new(
        format!("{}/access", server.uri()),
        format!("{}/content", server.uri()),
    )
    .grant(grant);
    App::new(
        config,
        catalog(),
        Arc::new(MemoryStash::new()),
        NoopChrome,
        Some("42".to_string()),
    )
}

#[tokio::test]
async fn full_flow_from_gate_to_playback() {
    init_tracing();
    let server = MockServer::start().await;
    mount_gate(&server, "yes").await;
    mount_content(&server).await;

    let app = app(&server, GrantConfig::with_key(SealKey::generate()));

    // Gate resolves before the splash plan exists.
    let plan = app.start().await;
    assert_eq!(plan.decision, AccessDecision::Allowed);

    // Lesson index 1 (0-based) resolves through the 1-based endpoint.
    let view = app.open_lesson(1, 1).await.unwrap();
    let url = view.content.unwrap().video_url.unwrap();
    assert_eq!(url, "https://x/video.mp4");

    // Mint and immediately redeem in the "new browsing context".
    let route = app.browser_handoff(&url).await.unwrap();
    assert!(route.starts_with("/video?token="));
    let token = route.strip_prefix("/video?token=").unwrap();

    let HandoffOutcome::Ready { url, grant } = app.redeem_handoff(Some(token)).await.unwrap()
    else {
        panic!("expected a redeemable grant");
    };
    assert_eq!(url, "https://x/video.mp4");
    assert_eq!(grant.user_id, "42");
    assert_eq!(grant.source, "telegram-webapp");

    // Hand the URL to a player and drive it a little.
    let mut engine = PlayerEngine::new(ScriptedSurface::new(), ScriptedFullscreen::new());
    engine.handle_event(MediaEvent::LoadedMetadata { duration_secs: 200.0 });
    engine.toggle_play().await;
    engine.handle_event(MediaEvent::Play);
    assert!(engine.state().is_playing);
    assert!(engine.has_started());

    engine.seek(0.5);
    assert_eq!(engine.state().progress_percent, 50.0);
}

#[tokio::test]
async fn expired_grant_is_distinguished_from_invalid() {
    init_tracing();
    let server = MockServer::start().await;
    let app = app(
        &server,
        GrantConfig::with_key(SealKey::generate()).expiry(Duration::ZERO),
    );

    let route = app.browser_handoff("https://x/video.mp4").await.unwrap();
    let token = route.strip_prefix("/video?token=").unwrap().to_string();

    // Expired: payload still comes back so the message can be precise.
    let HandoffOutcome::Expired { grant } = app.redeem_handoff(Some(token.as_str())).await.unwrap()
    else {
        panic!("expected an expired grant");
    };
    assert_eq!(grant.url, "https://x/video.mp4");
    assert!(!grant.is_valid);

    // Expiry observation removed the stash entry: now it's just invalid.
    assert_eq!(
        app.redeem_handoff(Some(token.as_str())).await.unwrap(),
        HandoffOutcome::Invalid
    );
}

#[tokio::test]
async fn every_bad_token_shape_collapses_to_invalid() {
    init_tracing();
    let server = MockServer::start().await;
    let app = app(&server, GrantConfig::with_key(SealKey::generate()));

    for token in [None, Some(""), Some("garbage"), Some("abcdef01.12345678")] {
        assert_eq!(
            app.redeem_handoff(token).await.unwrap(),
            HandoffOutcome::Invalid,
            "token {token:?} should be invalid"
        );
    }

    // Tampered digest on a real mint is equally generic.
    let route = app.browser_handoff("https://x/video.mp4").await.unwrap();
    let token = route.strip_prefix("/video?token=").unwrap();
    let (short_id, digest) = token.split_once('.').unwrap();
    let flipped = if digest.starts_with('0') { "1" } else { "0" };
    let tampered = format!("{short_id}.{flipped}{}", &digest[1..]);
    assert_eq!(
        app.redeem_handoff(Some(tampered.as_str())).await.unwrap(),
        HandoffOutcome::Invalid
    );
}

#[tokio::test]
async fn denied_gate_still_produces_a_splash_plan() {
    init_tracing();
    let server = MockServer::start().await;
    mount_gate(&server, "no").await;

    let app = app(&server, GrantConfig::with_key(SealKey::generate()));
    let plan = app.start().await;
    assert_eq!(plan.decision, AccessDecision::Denied);
    assert_eq!(plan.animation, Duration::from_millis(2_000));
}
