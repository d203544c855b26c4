use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Overrides `[api] base_url`.
pub const API_URL_ENV: &str = "FEDERATION_API_URL";

/// Overrides `[upload] url`.
pub const UPLOAD_URL_ENV: &str = "FEDERATION_UPLOAD_URL";

/// Load the client configuration once and return the cached copy.
///
/// Native builds read `config.toml` and then apply environment overrides
/// (a `.env` file is honoured). A missing or unparseable file falls back to
/// defaults. Browser builds have no filesystem, so they start from defaults
/// and take the API URL baked in at compile time.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> ClientConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
            ClientConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    tracing::info!(api = %config.api.base_url, "client configuration loaded");
    config
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    apply_env_overrides(&mut config, |key| match key {
        API_URL_ENV => option_env!("FEDERATION_API_URL").map(str::to_string),
        UPLOAD_URL_ENV => option_env!("FEDERATION_UPLOAD_URL").map(str::to_string),
        _ => None,
    });
    config
}

/// Parse `config.toml` contents, defaulting everything on error.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        ClientConfig::default()
    })
}

/// Apply environment overrides. Blank values are ignored.
pub fn apply_env_overrides(config: &mut ClientConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_blank(API_URL_ENV) {
        config.api.base_url = url;
    }
    if let Some(url) = non_blank(UPLOAD_URL_ENV) {
        config.upload.url = url;
    }
}
