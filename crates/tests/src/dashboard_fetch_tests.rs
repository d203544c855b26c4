use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Dashboard, Role};
use std::sync::Arc;

use crate::common::{self, MockBackend, LIVE_TOKEN};

#[tokio::test]
async fn test_fetch_club_dashboard_success() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, common::club_dashboard_json("Acme Club"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    store.fetch_dashboard(Role::Club).await.unwrap();

    let state = store.snapshot();
    let slice = state.dashboards.get(Role::Club);
    assert!(!slice.loading);
    assert_eq!(slice.error, None);
    match slice.data.as_ref().unwrap() {
        Dashboard::Club(d) => {
            assert_eq!(d.profile.name, "Acme Club");
            assert_eq!(d.stats.total_players, 42);
            assert_eq!(d.players.len(), 1);
        }
        other => panic!("expected a club dashboard, got {:?}", other),
    }
    assert!(!state.loading.is_busy());
}

#[tokio::test]
async fn test_fetch_sends_bearer_and_request_id() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/coach/dashboard", StatusCode::OK, common::dashboard_json("coach"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    store.fetch_dashboard(Role::Coach).await.unwrap();

    let request = mock.last("/api/coach/dashboard");
    assert_eq!(request.method, "GET");
    assert_eq!(request.authorization.as_deref(), Some("Bearer live-token"));
    assert!(request.request_id.is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_fetch_without_token_sends_no_authorization() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/state/dashboard", StatusCode::OK, common::dashboard_json("state"));
    let store = common::test_store(&mock, Arc::new(client::MemoryTokenStorage::new()));

    store.fetch_dashboard(Role::State).await.unwrap();

    assert_eq!(mock.last("/api/state/dashboard").authorization, None);
}

#[tokio::test]
async fn test_each_role_reads_its_own_endpoint() {
    let mock = MockBackend::start().await;
    for role in Role::ALL {
        mock.respond("GET", &role.dashboard_endpoint(), StatusCode::OK, common::dashboard_json(role.as_str()));
    }
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    for role in Role::ALL {
        store.fetch_dashboard(role).await.unwrap();
    }

    let state = store.snapshot();
    for role in Role::ALL {
        assert_eq!(mock.count("GET", &role.dashboard_endpoint()), 1);
        let data = state.dashboards.get(role).data.as_ref().unwrap();
        assert_eq!(data.role(), role);
    }
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_data() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, common::club_dashboard_json("Acme Club"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);
    store.fetch_dashboard(Role::Club).await.unwrap();

    mock.respond(
        "GET",
        "/api/club/dashboard",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "Club registry offline"}),
    );
    let err = store.fetch_dashboard(Role::Club).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);

    let state = store.snapshot();
    let slice = state.dashboards.get(Role::Club);
    assert_eq!(slice.error.as_deref(), Some("Club registry offline"));
    assert!(slice.data.is_some());
    assert!(!slice.loading);
}

#[tokio::test]
async fn test_other_roles_untouched_by_fetch() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/partner/dashboard", StatusCode::OK, common::dashboard_json("partner"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    store.fetch_dashboard(Role::Partner).await.unwrap();

    let state = store.snapshot();
    for role in Role::ALL.into_iter().filter(|r| *r != Role::Partner) {
        assert!(state.dashboards.get(role).is_empty());
    }
}

#[tokio::test]
async fn test_unexpected_payload_is_a_decode_error() {
    let mock = MockBackend::start().await;
    mock.respond("GET", "/api/player/dashboard", StatusCode::OK, json!({"unexpected": true}));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let err = store.fetch_dashboard(Role::Player).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);

    let state = store.snapshot();
    let slice = state.dashboards.get(Role::Player);
    assert!(slice.data.is_none());
    assert!(slice.error.is_some());
}
