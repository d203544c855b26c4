//! Bearer token persistence and expiry checks.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use std::sync::{Mutex, PoisonError};

/// Where the bearer token lives between page loads.
///
/// Implementations must be cheap: the store calls `load` before every
/// authenticated request.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local storage. Used in tests and as the browser cache in front
/// of `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Token kept in a file, for desktop builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStorage {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, path = %parent.display(), "could not create token directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(error = %e, path = %self.path.display(), "could not persist session token");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "could not remove session token")
            }
        }
    }
}

/// The `exp` claim (seconds since epoch) of a JWT.
///
/// The signature is not checked: the backend is authoritative and rejects a
/// forged token with 401. This only lets the client skip requests that are
/// certain to fail.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// True when the token carries an `exp` at or before `now_secs`. Tokens
/// without a readable `exp` are left for the server to judge.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    token_expiry(token).is_some_and(|exp| exp <= now_secs)
}

#[cfg(test)]
pub(crate) fn jwt_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"7","role":"club","exp":{}}}"#, exp));
    format!("{}.{}.signature", header, claims)
}
