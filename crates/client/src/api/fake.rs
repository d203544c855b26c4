//! Scripted backend for store unit tests.

use serde_json::{json, Value};
use shared_types::{AppError, Role, UploadedImage};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use super::{ApiRequest, Backend, ImageUpload, Method};

struct Scripted {
    delay: Duration,
    result: Result<Value, AppError>,
}

/// Answers requests from a queue in dispatch order and records every call.
#[derive(Default)]
pub struct FakeBackend {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<ApiRequest>>,
    uploads: Mutex<Vec<ImageUpload>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, result: Result<Value, AppError>) {
        self.respond_after(Duration::ZERO, result);
    }

    pub fn respond_after(&self, delay: Duration, result: Result<Value, AppError>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted { delay, result });
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Backend for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        let Some(scripted) = next else {
            return Err(AppError::network("no scripted response"));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }

    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        let url = format!("https://img.test/{}/{}", upload.kind.as_str(), upload.file_name);
        self.uploads.lock().unwrap().push(upload);
        Ok(UploadedImage { url })
    }
}

/// A minimal dashboard payload whose profile survives a decode/encode cycle
/// unchanged.
pub fn dashboard_payload(role: Role) -> Value {
    match role {
        Role::Admin => json!({
            "profile": {"id": 1, "email": "admin@fed.mx", "name": "Root", "role": "admin", "active": true},
            "stats": {"total_users": 10, "total_clubs": 2}
        }),
        Role::Player => json!({
            "profile": {"id": 2, "first_name": "Eva", "last_name": "Ruiz", "email": "eva@fed.mx", "status": "active"},
            "stats": {"wins": 3, "losses": 1}
        }),
        Role::Coach => json!({
            "profile": {"id": 3, "first_name": "Ana", "last_name": "Lopez", "email": "ana@fed.mx", "status": "active"},
            "stats": {"players_coached": 18}
        }),
        Role::Club => club_payload("Acme Club"),
        Role::Partner => json!({
            "profile": {"id": 5, "company_name": "Deportes MX", "email": "hola@dmx.mx", "status": "active"},
            "stats": {"sponsored_clubs": 4}
        }),
        Role::State => json!({
            "profile": {"id": 6, "name": "Comite Jalisco", "email": "jal@fed.mx"},
            "stats": {"registered_clubs": 31}
        }),
    }
}

pub fn club_payload(name: &str) -> Value {
    json!({
        "profile": {"id": 4, "name": name, "email": "info@acme.mx", "rfc": "ABC123456XYZ", "status": "active"},
        "stats": {"total_players": 42}
    })
}
