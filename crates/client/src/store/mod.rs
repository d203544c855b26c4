//! Centralized client state.
//!
//! Each feature owns a slice of [`StoreState`]. Thunks on [`Store`] are the
//! only writers: they flip the loading flags, await the backend, then commit
//! the outcome in one step. Every commit bumps a version on a `watch`
//! channel so a UI layer can re-render from a fresh [`Store::snapshot`].

pub mod auth;
pub mod dashboard;
pub mod loading;
pub mod resource;
pub mod toast;

pub use auth::AuthSlice;
pub use dashboard::DashboardSlices;
pub use loading::{LoadingSlice, LoadingTask};
pub use resource::{AsyncResource, Ticket};
pub use toast::{Toast, ToastId, ToastKind, ToastSlice};

use serde_json::Value;
use shared_types::{
    AppError, ClientConfig, Dashboard, ImageKind, LoginRequest, LoginResponse, ProfileUpdate,
    Role, User,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use validator::Validate;

use crate::api::{ApiRequest, Backend, ImageUpload, LOGIN_ENDPOINT, ME_ENDPOINT};
use crate::session::{is_expired, TokenStorage};
use crate::timer;

/// Largest image the upload form accepts.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const LOGIN_TASK: &str = "login";
pub const SESSION_TASK: &str = "session";
pub const UPLOAD_TASK: &str = "upload";

/// Loading label while `role`'s dashboard is being fetched.
pub fn dashboard_task(role: Role) -> String {
    format!("dashboard:{}", role.as_str())
}

/// Loading label while `role`'s profile is being saved.
pub fn profile_task(role: Role) -> String {
    format!("profile:{}", role.as_str())
}

/// Next id in a timestamp-derived sequence. Uses the clock when it moved
/// forward, otherwise `last + 1`, so ids stay strictly increasing.
pub(crate) fn next_id(last: u64, now_ms: u64) -> u64 {
    now_ms.max(last.saturating_add(1))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub auth: AuthSlice,
    pub dashboards: DashboardSlices,
    pub toasts: ToastSlice,
    pub loading: LoadingSlice,
}

impl StoreState {
    /// Everything tied to the signed-in user goes back to initial state.
    /// Toasts survive so a "signed out" notice can still show.
    fn reset_session(&mut self) {
        self.dashboards.reset_all();
        self.auth = AuthSlice::default();
        self.loading.clear();
    }
}

pub struct Store<B> {
    backend: B,
    tokens: Arc<dyn TokenStorage>,
    state: Mutex<StoreState>,
    changes: watch::Sender<u64>,
    toast_duration_ms: u64,
}

impl<B> Store<B> {
    fn commit<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let out = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        self.changes.send_modify(|version| *version = version.wrapping_add(1));
        out
    }
}

/// Loading bookkeeping of one in-flight thunk.
///
/// A thunk's future can be dropped at any await point (the UI task that
/// owned it went away). Unless [`Pending::settled`] was called first,
/// dropping this releases the loading task and the flags it set.
struct Pending<'a, B> {
    store: &'a Store<B>,
    task: u64,
    dashboard: Option<(Role, Ticket)>,
    auth: bool,
    settled: bool,
}

impl<'a, B> Pending<'a, B> {
    fn new(store: &'a Store<B>, task: u64) -> Self {
        Self {
            store,
            task,
            dashboard: None,
            auth: false,
            settled: false,
        }
    }

    fn with_dashboard(mut self, role: Role, ticket: Ticket) -> Self {
        self.dashboard = Some((role, ticket));
        self
    }

    fn with_auth(mut self) -> Self {
        self.auth = true;
        self
    }

    /// The thunk reached its own commit.
    fn settled(mut self) {
        self.settled = true;
    }
}

impl<B> Drop for Pending<'_, B> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let (task, dashboard, auth) = (self.task, self.dashboard, self.auth);
        tracing::debug!(task, "request dropped before it settled");
        self.store.commit(|s| {
            s.loading.finish(task);
            if let Some((role, ticket)) = dashboard {
                s.dashboards.get_mut(role).abandon(ticket);
            }
            if auth {
                s.auth.loading = false;
            }
        });
    }
}

/// Removes a toast when its expiry timer ends, or when the timer is dropped
/// before it ends.
struct ToastExpiry<'a, B> {
    store: &'a Store<B>,
    id: ToastId,
}

impl<B> Drop for ToastExpiry<'_, B> {
    fn drop(&mut self) {
        let id = self.id;
        self.store.commit(|s| s.toasts.remove(id));
    }
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B, tokens: Arc<dyn TokenStorage>, config: &ClientConfig) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            backend,
            tokens,
            state: Mutex::new(StoreState::default()),
            changes,
            toast_duration_ms: config.ui.toast_duration_ms,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> StoreState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receiver whose value changes after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Send with the stored bearer token. A rejected token ends the session.
    async fn send_authed(&self, request: ApiRequest) -> Result<Value, AppError> {
        let request = request.with_bearer(self.tokens.load());
        let result = self.backend.send(request).await;
        if let Err(e) = &result {
            if e.is_session_error() {
                self.expire_session();
            }
        }
        result
    }

    fn expire_session(&self) {
        tracing::warn!("session rejected by the server, signing out");
        self.tokens.clear();
        self.commit(|s| {
            s.reset_session();
            s.auth.expired = true;
        });
    }

    /// Load `role`'s dashboard into its slice.
    ///
    /// When several fetches for the same role overlap, the last one
    /// dispatched is the one committed.
    #[tracing::instrument(skip(self), fields(role = role.as_str()))]
    pub async fn fetch_dashboard(&self, role: Role) -> Result<(), AppError> {
        let (ticket, task) = self.commit(|s| {
            let ticket = s.dashboards.get_mut(role).begin();
            let task = s.loading.start(timer::now_millis(), dashboard_task(role));
            (ticket, task)
        });

        let pending = Pending::new(self, task).with_dashboard(role, ticket);
        let result = self
            .send_authed(ApiRequest::get(role.dashboard_endpoint()))
            .await
            .and_then(|value| Dashboard::decode(role, value));
        pending.settled();

        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "dashboard fetch failed");
                Err(e.clone())
            }
        };

        let committed = self.commit(|s| {
            s.loading.finish(task);
            s.dashboards.get_mut(role).settle(ticket, result)
        });
        if !committed {
            tracing::debug!("discarded stale dashboard response");
        }
        outcome
    }

    /// Save a partial profile, then refetch the dashboard it belongs to.
    ///
    /// Invalid input is rejected before anything is sent. The refetch is the
    /// only way the slice learns about the change; a failed refetch is
    /// recorded on the slice and does not fail the update.
    #[tracing::instrument(skip(self, update), fields(role = update.role().as_str()))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<(), AppError> {
        update.validate()?;
        let role = update.role();
        let body = update.to_json()?;

        let task = self.commit(|s| s.loading.start(timer::now_millis(), profile_task(role)));
        let pending = Pending::new(self, task);
        let result = self
            .send_authed(ApiRequest::put(role.profile_endpoint(), body))
            .await;
        pending.settled();
        self.commit(|s| s.loading.finish(task));

        if let Err(e) = result {
            tracing::warn!(error = %e, "profile update failed");
            return Err(e);
        }
        tracing::info!("profile updated");

        if let Err(e) = self.fetch_dashboard(role).await {
            tracing::warn!(error = %e, "refetch after profile update failed");
        }
        Ok(())
    }

    /// Upload a logo or photo and return its hosted URL.
    #[tracing::instrument(skip(self, file_name, bytes), fields(kind = kind.as_str(), size = bytes.len()))]
    pub async fn upload_image(
        &self,
        kind: ImageKind,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(image_error(kind, "The selected file is empty"));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(image_error(kind, "Images must be 5 MB or smaller"));
        }

        let task = self.commit(|s| s.loading.start(timer::now_millis(), UPLOAD_TASK));
        let pending = Pending::new(self, task);
        let result = self
            .backend
            .upload(ImageUpload::new(kind, file_name, bytes))
            .await;
        pending.settled();
        self.commit(|s| s.loading.finish(task));

        result.map(|image| image.url)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> Result<User, AppError> {
        if let Err(errors) = request.validate() {
            let err = AppError::from(errors);
            self.commit(|s| s.auth.fail(err.friendly_message()));
            return Err(err);
        }

        let body = serde_json::to_value(&request)
            .map_err(|e| AppError::decode(format!("Could not encode login request: {}", e)))?;
        let task = self.commit(|s| {
            s.auth.begin();
            s.loading.start(timer::now_millis(), LOGIN_TASK)
        });

        let pending = Pending::new(self, task).with_auth();
        let result = self
            .backend
            .send(ApiRequest::post(LOGIN_ENDPOINT, body))
            .await
            .and_then(|value| {
                serde_json::from_value::<LoginResponse>(value)
                    .map_err(|e| AppError::decode(format!("Unexpected login response: {}", e)))
            });
        pending.settled();

        match result {
            Ok(response) => {
                self.tokens.save(&response.token);
                let user = response.user;
                tracing::info!(role = user.role.as_str(), "signed in");
                self.commit(|s| {
                    s.loading.finish(task);
                    s.auth.sign_in(user.clone());
                });
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.commit(|s| {
                    s.loading.finish(task);
                    s.auth.fail(e.friendly_message());
                });
                Err(e)
            }
        }
    }

    /// Rebuild the signed-in user from a stored token at startup.
    ///
    /// `Ok(None)` means there is no usable session: no token, an expired
    /// token, or one the server rejected.
    pub async fn restore_session(&self) -> Result<Option<User>, AppError> {
        let Some(token) = self.tokens.load() else {
            return Ok(None);
        };
        if is_expired(&token, timer::now_secs()) {
            tracing::info!("stored session token has expired");
            self.tokens.clear();
            self.commit(|s| s.auth.expired = true);
            return Ok(None);
        }

        let task = self.commit(|s| {
            s.auth.begin();
            s.loading.start(timer::now_millis(), SESSION_TASK)
        });

        let pending = Pending::new(self, task).with_auth();
        let result = self
            .send_authed(ApiRequest::get(ME_ENDPOINT))
            .await
            .and_then(|value| {
                // accept both `{ user: {...} }` and a bare user
                let value = match value.get("user").cloned() {
                    Some(user) => user,
                    None => value,
                };
                serde_json::from_value::<User>(value)
                    .map_err(|e| AppError::decode(format!("Unexpected account payload: {}", e)))
            });
        pending.settled();

        match result {
            Ok(user) => {
                tracing::info!(role = user.role.as_str(), "session restored");
                self.commit(|s| {
                    s.loading.finish(task);
                    s.auth.sign_in(user.clone());
                });
                Ok(Some(user))
            }
            // send_authed already ended the session
            Err(e) if e.is_session_error() => Ok(None),
            Err(e) => {
                self.commit(|s| {
                    s.loading.finish(task);
                    s.auth.fail(e.friendly_message());
                });
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.tokens.clear();
        self.commit(StoreState::reset_session);
        tracing::info!("signed out");
    }

    /// Show a toast. `None` uses the configured default duration.
    pub fn push_toast(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        let duration = duration_ms.unwrap_or(self.toast_duration_ms);
        self.commit(|s| s.toasts.push(timer::now_millis(), kind, message, duration))
    }

    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        self.commit(|s| s.toasts.remove(id))
    }

    /// Remove a toast once `duration` has passed. Dropping the future
    /// early removes the toast at that point instead.
    pub async fn dismiss_after(&self, id: ToastId, duration: Duration) {
        let _expiry = ToastExpiry { store: self, id };
        timer::sleep(duration).await;
    }

    /// Show a toast and resolve when it has expired.
    pub async fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.push_toast(kind, message, None);
        self.dismiss_after(id, Duration::from_millis(self.toast_duration_ms))
            .await;
    }
}

fn image_error(kind: ImageKind, message: &str) -> AppError {
    let field = match kind {
        ImageKind::Logo => "logo_url",
        ImageKind::Photo => "photo_url",
    };
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), message.to_string());
    AppError::validation(message, field_errors)
}
