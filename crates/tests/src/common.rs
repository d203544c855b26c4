use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use client::{HttpBackend, MemoryTokenStorage, Store};
use serde_json::{json, Value};
use shared_types::ClientConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A JWT whose `exp` claim lies in 1970.
pub const EXPIRED_TOKEN: &str = "eyJhbGciOiJub25lIn0.eyJleHAiOjF9.signature";

/// An opaque token the client cannot read an expiry from.
pub const LIVE_TOKEN: &str = "live-token";

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<(String, String), (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process REST backend on an ephemeral port. Answers every
/// `(method, path)` with whatever was last registered for it and records
/// each request it receives.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock backend stopped");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Register a JSON response.
    pub fn respond(&self, method: &str, path: &str, status: StatusCode, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Register a response body verbatim, which need not be JSON.
    pub fn respond_raw(&self, method: &str, path: &str, status: StatusCode, body: &str) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// The most recent request to `path`.
    pub fn last(&self, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.path == path)
            .unwrap_or_else(|| panic!("no request reached {}", path))
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_value("authorization"),
        request_id: header_value("x-request-id"),
        content_type: header_value("content-type"),
        body: body.to_vec(),
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&(method.to_string(), path))
        .cloned();

    let (status, body) = canned.unwrap_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            json!({"message": "No such route"}).to_string(),
        )
    });
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Client configuration pointing at the mock backend.
pub fn config_for(mock: &MockBackend) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.api.base_url = mock.base_url.clone();
    config.api.timeout_secs = 5;
    config.upload.url = mock.upload_url();
    config
}

/// A store wired to the mock backend through the real HTTP transport.
pub fn test_store(mock: &MockBackend, tokens: Arc<MemoryTokenStorage>) -> Store<HttpBackend> {
    let config = config_for(mock);
    let backend = HttpBackend::new(&config).expect("Failed to build HTTP backend");
    Store::new(backend, tokens, &config)
}

/// A store that already holds `token`.
pub fn signed_in_store(mock: &MockBackend, token: &str) -> (Store<HttpBackend>, Arc<MemoryTokenStorage>) {
    let tokens = Arc::new(MemoryTokenStorage::with_token(token));
    (test_store(mock, tokens.clone()), tokens)
}

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@fed.mx", role),
        "name": "Test User",
        "role": role,
        "active": true
    })
}

pub fn club_dashboard_json(name: &str) -> Value {
    json!({
        "profile": {
            "id": 4,
            "name": name,
            "email": "info@acme.mx",
            "rfc": "ABC123456XYZ",
            "status": "active"
        },
        "stats": {"total_players": 42, "total_coaches": 3},
        "players": [
            {"id": 10, "first_name": "Eva", "last_name": "Ruiz", "email": "eva@fed.mx", "status": "active"}
        ],
        "coaches": []
    })
}

/// A minimal payload that decodes for `role`.
pub fn dashboard_json(role: &str) -> Value {
    match role {
        "admin" => json!({
            "profile": user_json(1, "admin"),
            "stats": {"total_users": 10, "total_clubs": 2}
        }),
        "player" => json!({
            "profile": {"id": 2, "first_name": "Eva", "last_name": "Ruiz", "email": "eva@fed.mx"},
            "stats": {"wins": 3, "losses": 1}
        }),
        "coach" => json!({
            "profile": {"id": 3, "first_name": "Ana", "last_name": "Lopez", "email": "ana@fed.mx"},
            "stats": {"players_coached": 18}
        }),
        "club" => club_dashboard_json("Acme Club"),
        "partner" => json!({
            "profile": {"id": 5, "company_name": "Deportes MX", "email": "hola@dmx.mx"},
            "stats": {"sponsored_clubs": 4}
        }),
        "state" => json!({
            "profile": {"id": 6, "name": "Comite Jalisco", "email": "jal@fed.mx"},
            "stats": {"registered_clubs": 31}
        }),
        other => panic!("unknown role {}", other),
    }
}
