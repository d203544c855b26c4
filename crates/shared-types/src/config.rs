use serde::{Deserialize, Serialize};

/// REST backend location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are joined onto.
    pub base_url: String,
    /// Per-request timeout on native targets. Browsers apply their own.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Third-party image host used for logos and photos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    pub url: String,
    /// Unsigned upload preset, sent as the `upload_preset` form field.
    pub preset: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/api/uploads/image".to_string(),
            preset: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays visible when the caller gives no duration.
    pub toast_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Key the bearer token is persisted under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "federation_token".to_string(),
        }
    }
}

/// Top-level client config file structure matching `config.toml`.
///
/// Every section defaults, so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub ui: UiConfig,
    pub session: SessionConfig,
}
