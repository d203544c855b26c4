//! Bridge between the framework-independent store and Dioxus reactivity.
//!
//! The store lives behind an `Arc` for the whole app. A background future
//! mirrors the store's change counter into a signal, and every component
//! that calls [`AppStore::snapshot`] subscribes to that signal.

use client::api::HttpBackend;
use client::config::load_config;
use client::store::{StoreState, Toast, ToastId, ToastKind};
use client::{Store, TokenStorage};
use dioxus::prelude::*;
use shared_types::{AppError, ImageKind, LoginRequest, ProfileUpdate, Role, User};
use shared_ui::{ToastItem, ToastTone};
use std::sync::Arc;

pub type FederationStore = Store<HttpBackend>;

#[cfg(target_arch = "wasm32")]
type SessionTokens = BrowserTokenStorage;

#[cfg(not(target_arch = "wasm32"))]
type SessionTokens = client::session::FileTokenStorage;

/// The store plus the concrete token storage behind it.
#[derive(Clone)]
pub struct SharedStore {
    store: Arc<FederationStore>,
    tokens: Arc<SessionTokens>,
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

pub fn build_store() -> Result<SharedStore, AppError> {
    let config = load_config();
    let backend = HttpBackend::new(config)?;

    #[cfg(target_arch = "wasm32")]
    let tokens = Arc::new(BrowserTokenStorage::new(&config.session.storage_key));

    #[cfg(not(target_arch = "wasm32"))]
    let tokens = Arc::new(client::session::FileTokenStorage::new(format!(
        ".{}",
        config.session.storage_key
    )));

    let storage: Arc<dyn TokenStorage> = tokens.clone();
    let store = Arc::new(Store::new(backend, storage, config));
    tracing::info!(api = backend_url(&store), "store ready");
    Ok(SharedStore { store, tokens })
}

fn backend_url(store: &FederationStore) -> &str {
    store.backend().base_url()
}

/// Copyable handle to the shared store, provided as context.
#[derive(Clone, Copy)]
pub struct AppStore {
    shared: CopyValue<SharedStore>,
    version: Signal<u64>,
    ready: Signal<bool>,
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>()
}

impl AppStore {
    pub fn new(shared: SharedStore) -> Self {
        Self {
            shared: CopyValue::new(shared),
            version: Signal::new(0),
            ready: Signal::new(false),
        }
    }

    fn store(&self) -> Arc<FederationStore> {
        self.shared.read().store.clone()
    }

    /// Current state. Subscribes the calling component to store changes.
    pub fn snapshot(&self) -> StoreState {
        let _ = *self.version.read();
        self.store().snapshot()
    }

    /// False until the stored session has been checked at startup.
    pub fn is_ready(&self) -> bool {
        *self.ready.read()
    }

    pub async fn forward_changes(mut self) {
        let mut changes = self.store().subscribe();
        while changes.changed().await.is_ok() {
            let version = *changes.borrow_and_update();
            self.version.set(version);
        }
    }

    pub async fn restore_session(mut self) {
        let tokens = self.shared.read().tokens.clone();
        hydrate_tokens(&tokens).await;
        if let Err(e) = self.store().restore_session().await {
            tracing::warn!(error = %e, "could not restore the previous session");
        }
        self.ready.set(true);
    }

    /// Runs on the root scope, so leaving the page that asked for the data
    /// does not cancel the request.
    pub fn fetch_dashboard(&self, role: Role) {
        let store = self.store();
        spawn_forever(async move {
            // the slice records the failure for the view
            let _ = store.fetch_dashboard(role).await;
        });
    }

    pub async fn update_profile(self, update: ProfileUpdate) -> Result<(), AppError> {
        self.store().update_profile(update).await
    }

    pub async fn upload_image(
        self,
        kind: ImageKind,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        self.store().upload_image(kind, file_name, bytes).await
    }

    pub async fn login(self, request: LoginRequest) -> Result<User, AppError> {
        self.store().login(request).await
    }

    pub fn logout(&self) {
        self.store().logout();
    }

    /// Show a toast for the configured duration. The expiry timer outlives
    /// the component that raised the toast.
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let store = self.store();
        let message = message.into();
        spawn_forever(async move { store.notify(kind, message).await });
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.store().dismiss_toast(ToastId(id));
    }
}

pub fn toast_item(toast: &Toast) -> ToastItem {
    let tone = match toast.kind {
        ToastKind::Info => ToastTone::Info,
        ToastKind::Success => ToastTone::Success,
        ToastKind::Warning => ToastTone::Warning,
        ToastKind::Error => ToastTone::Error,
    };
    ToastItem {
        id: toast.id.0,
        tone,
        message: toast.message.clone(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn hydrate_tokens(_tokens: &SessionTokens) {}

#[cfg(target_arch = "wasm32")]
async fn hydrate_tokens(tokens: &SessionTokens) {
    tokens.hydrate().await;
}

/// `localStorage`-backed token storage. Reads are served from memory; the
/// cache is filled once at startup by [`BrowserTokenStorage::hydrate`].
#[cfg(target_arch = "wasm32")]
pub struct BrowserTokenStorage {
    key: String,
    cache: client::MemoryTokenStorage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStorage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            cache: client::MemoryTokenStorage::new(),
        }
    }

    fn key_literal(&self) -> String {
        serde_json::Value::String(self.key.clone()).to_string()
    }

    pub async fn hydrate(&self) {
        let script = format!("return window.localStorage.getItem({});", self.key_literal());
        match document::eval(&script).join::<Option<String>>().await {
            Ok(Some(token)) => self.cache.save(&token),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = ?e, "could not read the stored session"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStorage for BrowserTokenStorage {
    fn load(&self) -> Option<String> {
        self.cache.load()
    }

    fn save(&self, token: &str) {
        self.cache.save(token);
        let value = serde_json::Value::String(token.to_string()).to_string();
        document::eval(&format!(
            "window.localStorage.setItem({}, {});",
            self.key_literal(),
            value
        ));
    }

    fn clear(&self) {
        self.cache.clear();
        document::eval(&format!(
            "window.localStorage.removeItem({});",
            self.key_literal()
        ));
    }
}
