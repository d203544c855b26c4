use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    AppErrorKind, ClubProfileUpdate, CoachProfileUpdate, Dashboard, PlayerProfileUpdate, ProfileUpdate, Role,
};

use crate::common::{self, MockBackend, LIVE_TOKEN};

fn club_rename() -> ProfileUpdate {
    ProfileUpdate::Club(ClubProfileUpdate {
        name: Some("Acme Club".into()),
        rfc: Some("ABC123456XYZ".into()),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_club_update_puts_then_refetches_once() {
    let mock = MockBackend::start().await;
    mock.respond("PUT", "/api/club/profile", StatusCode::OK, json!({"success": true}));
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, common::club_dashboard_json("Acme Club"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    store.update_profile(club_rename()).await.unwrap();

    assert_eq!(mock.count("PUT", "/api/club/profile"), 1);
    assert_eq!(mock.count("GET", "/api/club/dashboard"), 1);

    let requests = mock.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[1].method, "GET");

    let put = mock.last("/api/club/profile");
    assert_eq!(put.json(), json!({"name": "Acme Club", "rfc": "ABC123456XYZ"}));
    assert_eq!(put.authorization.as_deref(), Some("Bearer live-token"));
    assert!(put.content_type.is_some_and(|ct| ct.starts_with("application/json")));

    let state = store.snapshot();
    match state.dashboards.get(Role::Club).data.as_ref().unwrap() {
        Dashboard::Club(d) => assert_eq!(d.profile.name, "Acme Club"),
        other => panic!("expected a club dashboard, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_update_sends_nothing() {
    let mock = MockBackend::start().await;
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let update = ProfileUpdate::Player(PlayerProfileUpdate {
        email: Some("not-an-email".into()),
        ..Default::default()
    });
    let err = store.update_profile(update).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field("email").is_some());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_invalid_rfc_is_rejected_locally() {
    let mock = MockBackend::start().await;
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let update = ProfileUpdate::Club(ClubProfileUpdate {
        rfc: Some("nope".into()),
        ..Default::default()
    });
    let err = store.update_profile(update).await.unwrap_err();

    assert!(err.field("rfc").is_some());
    assert_eq!(mock.count("PUT", "/api/club/profile"), 0);
}

#[tokio::test]
async fn test_rejected_update_skips_refetch() {
    let mock = MockBackend::start().await;
    mock.respond(
        "PUT",
        "/api/club/profile",
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"message": "Invalid data", "errors": {"rfc": ["RFC is already registered"]}}),
    );
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let err = store.update_profile(club_rename()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Invalid data");
    assert_eq!(err.field("rfc"), Some("RFC is already registered"));
    assert_eq!(mock.count("GET", "/api/club/dashboard"), 0);
    assert!(!store.snapshot().loading.is_busy());
}

#[tokio::test]
async fn test_failed_refetch_does_not_fail_update() {
    let mock = MockBackend::start().await;
    mock.respond("PUT", "/api/coach/profile", StatusCode::OK, json!({}));
    mock.respond(
        "GET",
        "/api/coach/dashboard",
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"message": "Dashboards are warming up"}),
    );
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let update = ProfileUpdate::Coach(CoachProfileUpdate {
        phone: Some("3312345678".into()),
        ..Default::default()
    });
    store.update_profile(update).await.unwrap();

    let state = store.snapshot();
    assert_eq!(
        state.dashboards.get(Role::Coach).error.as_deref(),
        Some("Dashboards are warming up")
    );
}

#[tokio::test]
async fn test_empty_success_body_is_accepted() {
    let mock = MockBackend::start().await;
    mock.respond_raw("PUT", "/api/state/profile", StatusCode::OK, "");
    mock.respond("GET", "/api/state/dashboard", StatusCode::OK, common::dashboard_json("state"));
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);

    let update = ProfileUpdate::State(shared_types::StateProfileUpdate {
        name: Some("Comite Jalisco".into()),
        ..Default::default()
    });
    store.update_profile(update).await.unwrap();

    assert_eq!(mock.count("GET", "/api/state/dashboard"), 1);
}

#[tokio::test]
async fn test_cleared_website_is_sent_as_null_and_refetched() {
    let mock = MockBackend::start().await;
    let mut with_site = common::club_dashboard_json("Acme Club");
    with_site["profile"]["website"] = json!("https://acme.mx");
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, with_site);
    let (store, _tokens) = common::signed_in_store(&mock, LIVE_TOKEN);
    store.fetch_dashboard(Role::Club).await.unwrap();
    let before = store.snapshot().dashboards.get(Role::Club).data.clone().unwrap();
    assert_eq!(before.profile_json()["website"], json!("https://acme.mx"));

    mock.respond("PUT", "/api/club/profile", StatusCode::OK, json!({"success": true}));
    mock.respond("GET", "/api/club/dashboard", StatusCode::OK, common::club_dashboard_json("Acme Club"));
    let update = ProfileUpdate::Club(ClubProfileUpdate {
        website: Some(String::new()),
        ..Default::default()
    });
    store.update_profile(update).await.unwrap();

    assert_eq!(mock.last("/api/club/profile").json(), json!({"website": null}));
    let after = store.snapshot().dashboards.get(Role::Club).data.clone().unwrap();
    assert_ne!(after.profile_json(), before.profile_json());
    assert_eq!(after.profile_json().get("website"), None);
}
