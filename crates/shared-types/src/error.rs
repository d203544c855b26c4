use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown when the server gives us nothing better to display.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of client-visible errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced an HTTP response.
    Network,
    /// Non-2xx response that is not one of the more specific kinds below.
    Server,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Form-local validation or a 422 from the backend.
    Validation,
    /// A 2xx response whose body did not match the expected DTO.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error shared by the transport, the store and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Server, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    /// Build an error from a non-2xx HTTP response.
    ///
    /// The body's `message` (or `error`) string is surfaced verbatim. When the
    /// body is empty or not JSON the generic fallback is used instead.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
            })
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        let field_errors = parsed
            .as_ref()
            .and_then(|v| v.get("field_errors").or_else(|| v.get("errors")))
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.iter()
                    .filter_map(|(field, msg)| {
                        let text = match msg {
                            serde_json::Value::String(s) => Some(s.clone()),
                            serde_json::Value::Array(items) => {
                                items.first().and_then(|m| m.as_str()).map(str::to_string)
                            }
                            _ => None,
                        };
                        text.map(|t| (field.clone(), t))
                    })
                    .collect::<HashMap<_, _>>()
            })
            .unwrap_or_default();

        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::Validation,
            _ => AppErrorKind::Server,
        };

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// The text a toast or inline error should show for this error.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// True when the error means the stored session is no longer usable.
    pub fn is_session_error(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// First error message recorded for a form field, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields", field_errors)
    }
}
