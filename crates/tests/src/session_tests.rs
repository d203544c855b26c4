use axum::http::StatusCode;
use client::{MemoryTokenStorage, TokenStorage};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, LoginRequest, Role};
use std::sync::Arc;

use crate::common::{self, MockBackend, EXPIRED_TOKEN, LIVE_TOKEN};

fn credentials(email: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: "s3cret".to_string(),
    }
}

#[tokio::test]
async fn test_login_stores_token_and_user() {
    let mock = MockBackend::start().await;
    mock.respond(
        "POST",
        "/api/auth/login",
        StatusCode::OK,
        json!({"token": "fresh-token", "user": common::user_json(7, "club")}),
    );
    let tokens = Arc::new(MemoryTokenStorage::new());
    let store = common::test_store(&mock, tokens.clone());

    let user = store.login(credentials("club@fed.mx")).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Club);
    assert_eq!(tokens.load().as_deref(), Some("fresh-token"));

    let state = store.snapshot();
    assert_eq!(state.auth.role(), Some(Role::Club));
    assert!(!state.auth.loading);
    assert_eq!(state.auth.error, None);

    let request = mock.last("/api/auth/login");
    assert_eq!(request.authorization, None);
    assert_eq!(request.json(), json!({"email": "club@fed.mx", "password": "s3cret"}));
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let mock = MockBackend::start().await;
    mock.respond(
        "POST",
        "/api/auth/login",
        StatusCode::UNAUTHORIZED,
        json!({"message": "Invalid email or password"}),
    );
    let tokens = Arc::new(MemoryTokenStorage::new());
    let store = common::test_store(&mock, tokens.clone());

    let err = store.login(credentials("club@fed.mx")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(tokens.load(), None);
    let state = store.snapshot();
    assert_eq!(state.auth.user, None);
    assert_eq!(state.auth.error.as_deref(), Some("Invalid email or password"));
    // a failed sign-in is not an expired session
    assert!(!state.auth.expired);
}

#[tokio::test]
async fn test_login_with_malformed_email_makes_no_request() {
    let mock = MockBackend::start().await;
    let store = common::test_store(&mock, Arc::new(MemoryTokenStorage::new()));

    let err = store.login(credentials("club-at-fed")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field("email").is_some());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_restore_session_from_stored_token() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/auth/me", StatusCode::OK, json!({"user": common::user_json(3, "coach")}));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let user = store.restore_session().await.unwrap().unwrap();

    assert_eq!(user.role, Role::Coach);
    assert_eq!(store.snapshot().auth.role(), Some(Role::Coach));
    assert_eq!(
        mock.last("/api/auth/me").authorization.as_deref(),
        Some("Bearer live-token")
    );
}

#[tokio::test]
async fn test_restore_session_accepts_bare_user() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/auth/me", StatusCode::OK, common::user_json(1, "admin"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let user = store.restore_session().await.unwrap().unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn test_restore_session_with_expired_token_makes_no_request() {
    let mock = MockBackend::start().await;
    let (store, tokens) = common::signed_in_store(&mock, EXPIRED_TOKEN);

    assert_eq!(store.restore_session().await.unwrap(), None);

    assert!(mock.requests().is_empty());
    assert_eq!(tokens.load(), None);
    assert!(store.snapshot().auth.expired);
}

#[tokio::test]
async fn test_restore_session_with_rejected_token() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/auth/me", StatusCode::UNAUTHORIZED, json!({"message": "Token revoked"}));
    let (store, tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    assert_eq!(store.restore_session().await.unwrap(), None);

    assert_eq!(tokens.load(), None);
    let state = store.snapshot();
    assert_eq!(state.auth.user, None);
    assert!(state.auth.expired);
}

#[tokio::test]
async fn test_unauthorized_response_ends_session() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/auth/me", StatusCode::OK, common::user_json(4, "club"));
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, common::club_dashboard_json("Acme Club"));
    let (store, tokens) = common::signed_in_store(&mock, LIVE_TOKEN);
    store.restore_session().await.unwrap();
    store.fetch_dashboard(Role::Club).await.unwrap();

    mock.respond(
        "GET",
        "/api/club/dashboard",
        StatusCode::UNAUTHORIZED,
        json!({"message": "Session expired"}),
    );
    let err = store.fetch_dashboard(Role::Club).await.unwrap_err();

    assert!(err.is_session_error());
    assert_eq!(tokens.load(), None);
    let state = store.snapshot();
    assert_eq!(state.auth.user, None);
    assert!(state.auth.expired);
    assert!(state.dashboards.all_empty());
}

#[tokio::test]
async fn test_logout_clears_token_and_slices() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/auth/me", StatusCode::OK, common::user_json(2, "player"));
    mock.respond("GET", "/api/player/dashboard", StatusCode::OK, common::dashboard_json("player"));
    let (store, tokens) = common::signed_in_store(&mock, LIVE_TOKEN);
    store.restore_session().await.unwrap();
    store.fetch_dashboard(Role::Player).await.unwrap();

    store.logout();

    assert_eq!(tokens.load(), None);
    let state = store.snapshot();
    assert!(!state.auth.is_authenticated());
    assert!(!state.auth.expired);
    assert!(state.dashboards.all_empty());
}
