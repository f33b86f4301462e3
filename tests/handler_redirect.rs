mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use urlite::api::handlers::redirect_handler;

fn test_app(state: urlite::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_found() {
    let (state, repository, _cache) = common::create_test_state(true);
    repository.seed(
        "https://example.com/landing",
        "abc",
        Some(Utc::now() + Duration::days(1)),
    );
    let server = test_app(state);

    let response = server.get("/abc").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code_not_found() {
    let (state, _repository, _cache) = common::create_test_state(true);
    let server = test_app(state);

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_expired_record_not_found() {
    let (state, repository, _cache) = common::create_test_state(true);
    repository.seed(
        "https://example.com/old",
        "old",
        Some(Utc::now() - Duration::hours(1)),
    );
    let server = test_app(state);

    let response = server.get("/old").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_and_unknown_responses_match() {
    let (state, repository, _cache) = common::create_test_state(true);
    repository.seed(
        "https://example.com/old",
        "old",
        Some(Utc::now() - Duration::hours(1)),
    );
    let server = test_app(state);

    let expired = server.get("/old").await.json::<serde_json::Value>();
    let unknown = server.get("/missing").await.json::<serde_json::Value>();

    // Only the echoed code differs; the shape and taxonomy are identical.
    assert_eq!(expired["error"]["code"], unknown["error"]["code"]);
}

#[tokio::test]
async fn test_redirect_populates_cache() {
    let (state, repository, cache) = common::create_test_state(true);
    repository.seed(
        "https://example.com/cached",
        "hot",
        Some(Utc::now() + Duration::days(1)),
    );
    let server = test_app(state);

    server.get("/hot").await.assert_status(StatusCode::FOUND);
    assert!(cache.contains("hot"));

    // Second resolution is served from cache without a store lookup.
    server.get("/hot").await.assert_status(StatusCode::FOUND);
    assert_eq!(repository.find_by_code_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_stale_cache_entry_lazily_invalidated() {
    let (state, repository, cache) = common::create_test_state(true);
    let stale = repository.seed(
        "https://example.com/stale",
        "stale",
        Some(Utc::now() - Duration::minutes(5)),
    );
    cache.put("stale", stale);
    let server = test_app(state);

    let response = server.get("/stale").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(!cache.contains("stale"));
}

#[tokio::test]
async fn test_redirect_record_without_expiry() {
    let (state, repository, _cache) = common::create_test_state(true);
    repository.seed("https://example.com/forever", "keep", None);
    let server = test_app(state);

    let response = server.get("/keep").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/forever"
    );
}
