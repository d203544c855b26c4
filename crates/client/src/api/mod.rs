//! REST transport seam.
//!
//! The store talks to the backend only through [`Backend`], so the same
//! thunks run against [`HttpBackend`] in the app and a scripted fake in
//! unit tests.

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpBackend;

use serde_json::Value;
use shared_types::{AppError, ImageKind, UploadedImage};
use std::fmt;

/// Login endpoint. Never carries a bearer token.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Returns the account behind the current bearer token.
pub const ME_ENDPOINT: &str = "/api/auth/me";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Put => write!(f, "PUT"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// One JSON request against the REST backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/api/`, joined onto the configured base URL.
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
            bearer: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

/// An image file headed for the third-party upload service.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub kind: ImageKind,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(kind: ImageKind, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            kind,
            file_name,
            content_type,
            bytes,
        }
    }
}

/// MIME type guessed from the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Issues requests against the federation REST API and the image host.
///
/// Implementations perform exactly one attempt per call: no retries, no
/// cancellation.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Send a JSON request. A 2xx with an empty body yields `Value::Null`.
    async fn send(&self, request: ApiRequest) -> Result<Value, AppError>;

    /// Upload an image and return where it is hosted.
    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, AppError>;
}
