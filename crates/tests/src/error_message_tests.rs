use axum::http::StatusCode;
use client::{HttpBackend, MemoryTokenStorage, Store, TokenStorage};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Role, GENERIC_ERROR_MESSAGE};
use std::sync::Arc;

use crate::common::{self, MockBackend, LIVE_TOKEN};

async fn slice_error(mock: &MockBackend, role: Role) -> (AppErrorKind, Option<String>) {
    let (store, _tokens) = common::signed_in_store(mock, LIVE_TOKEN);
    let err = store.fetch_dashboard(role).await.unwrap_err();
    let message = store.snapshot().dashboards.get(role).error.clone();
    (err.kind, message)
}

#[tokio::test]
async fn test_server_message_is_shown_verbatim() {
    let mock = MockBackend::start().await;
    mock.respond(
        "GET",
        "/api/partner/dashboard",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "Sponsorship ledger unavailable"}),
    );

    let (kind, message) = slice_error(&mock, Role::Partner).await;
    assert_eq!(kind, AppErrorKind::Server);
    assert_eq!(message.as_deref(), Some("Sponsorship ledger unavailable"));
}

#[tokio::test]
async fn test_error_key_is_accepted() {
    let mock = MockBackend::start().await;
    mock.respond(
        "GET",
        "/api/admin/dashboard",
        StatusCode::BAD_REQUEST,
        json!({"error": "Malformed filter"}),
    );

    let (_, message) = slice_error(&mock, Role::Admin).await;
    assert_eq!(message.as_deref(), Some("Malformed filter"));
}

#[tokio::test]
async fn test_empty_body_falls_back_to_generic_message() {
    let mock = MockBackend::start().await;
    mock.respond_raw("GET", "/api/state/dashboard", StatusCode::BAD_GATEWAY, "");

    let (kind, message) = slice_error(&mock, Role::State).await;
    assert_eq!(kind, AppErrorKind::Server);
    assert_eq!(message.as_deref(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_non_json_body_falls_back_to_generic_message() {
    let mock = MockBackend::start().await;
    mock.respond_raw(
        "GET",
        "/api/player/dashboard",
        StatusCode::SERVICE_UNAVAILABLE,
        "<html><body>Maintenance</body></html>",
    );

    let (_, message) = slice_error(&mock, Role::Player).await;
    assert_eq!(message.as_deref(), Some(GENERIC_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_status_codes_map_to_error_kinds() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/coach/dashboard", StatusCode::FORBIDDEN, json!({"message": "Coaches only"}));
    mock.respond("GET", "/api/club/dashboard", StatusCode::NOT_FOUND, json!({"message": "Club not found"}));

    let (kind, message) = slice_error(&mock, Role::Coach).await;
    assert_eq!(kind, AppErrorKind::Forbidden);
    assert_eq!(message.as_deref(), Some("Coaches only"));

    let (kind, _) = slice_error(&mock, Role::Club).await;
    assert_eq!(kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_forbidden_keeps_the_session() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/admin/dashboard", StatusCode::FORBIDDEN, json!({"message": "Admins only"}));
    let (store, tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    store.fetch_dashboard(Role::Admin).await.unwrap_err();

    assert_eq!(tokens.load().as_deref(), Some(LIVE_TOKEN));
    assert!(!store.snapshot().auth.expired);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = shared_types::ClientConfig::default();
    config.api.base_url = format!("http://{}", addr);
    config.api.timeout_secs = 5;
    let backend = HttpBackend::new(&config).unwrap();
    let store = Store::new(backend, Arc::new(MemoryTokenStorage::with_token(LIVE_TOKEN)), &config);

    let err = store.fetch_dashboard(Role::Club).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(
        store.snapshot().dashboards.get(Role::Club).error.as_deref(),
        Some("Could not reach the server. Check your connection.")
    );
}
