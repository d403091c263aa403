//! Session use-cases: login, registration, profile and password updates.
//!
//! LIFECYCLE
//! =========
//! Each use-case runs `idle -> loading -> {success, failure} -> idle`.
//! `loading` is reset by a drop guard so every exit path clears it. The
//! store is the terminal error boundary: failures become one negative
//! notification and are never returned to the caller.
//!
//! TRADE-OFFS
//! ==========
//! Use-cases are not serialized. Two overlapping calls share one `loading`
//! flag, so the first to finish clears it while the other is still pending.
//! Callers that need at-most-one-in-flight must disable triggers while
//! [`Session::is_loading`] is true.

use std::sync::Arc;

use super::{Session, normalize_token};
use crate::error::ApiError;
use crate::net::types::User;
use crate::notify::{Notification, Notifier};
use crate::router::{DEFAULT_LANDING, Navigator};
use crate::services::AuthApi;
use crate::storage::{self, KeyValueStorage, TOKEN_KEY, USER_KEY};

/// Status the API answers a successful login with.
pub const LOGIN_SUCCESS_STATUS: u16 = 200;
/// Status the API answers a successful registration with.
pub const REGISTER_SUCCESS_STATUS: u16 = 201;
/// Status the API answers successful profile and password updates with.
pub const UPDATE_SUCCESS_STATUS: u16 = 200;

pub struct SessionStore {
    session: Session,
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

/// Clears `loading` when dropped.
struct LoadingGuard<'a> {
    store: &'a SessionStore,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}

impl SessionStore {
    pub fn new(
        session: Session,
        api: Arc<dyn AuthApi>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { session, api, storage, notifier, navigator }
    }

    /// Read handle shared with the interceptor and route guards.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    pub fn set_user(&self, user: Option<User>) {
        self.session.write(|s| s.user.clone_from(&user));
        self.persist_user(user.as_ref());
    }

    pub fn set_token(&self, token: Option<String>) {
        let token = normalize_token(token);
        self.session.write(|s| s.token.clone_from(&token));
        self.persist_token(token.as_deref());
    }

    pub fn set_loading(&self, loading: bool) {
        self.session.write(|s| s.loading = loading);
    }

    /// Forget the current identity in memory and storage.
    pub fn logout(&self) {
        self.apply_credentials(None, None);
        tracing::info!("session cleared");
    }

    // =========================================================================
    // USE-CASES
    // =========================================================================

    /// Authenticate and, on success, land on the default view.
    ///
    /// Returns `true` when credentials were applied.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _loading = self.begin();
        match self.api.login(email, password).await {
            Ok(resp) if resp.status == LOGIN_SUCCESS_STATUS => {
                self.apply_credentials(Some(resp.data.user), Some(resp.data.token));
                tracing::info!(email, "login succeeded");
                self.navigator.navigate(DEFAULT_LANDING);
                true
            }
            Ok(resp) => {
                tracing::warn!(status = resp.status, "login returned unexpected status");
                false
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Create an account plus organization and sign in as its first user.
    pub async fn register(&self, name: &str, email: &str, password: &str, organization_name: &str) -> bool {
        let _loading = self.begin();
        match self.api.register(name, email, password, organization_name).await {
            Ok(resp) if resp.status == REGISTER_SUCCESS_STATUS => {
                let payload = resp.data;
                self.apply_credentials(Some(payload.user), Some(payload.token));
                tracing::info!(email, "registration succeeded");
                self.notifier.notify(Notification::positive(payload.message));
                self.navigator.navigate(DEFAULT_LANDING);
                true
            }
            Ok(resp) => {
                tracing::warn!(status = resp.status, "register returned unexpected status");
                false
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Replace the profile with the server's copy. The token is untouched.
    pub async fn update_profile(&self, name: &str, email: &str, phone: Option<&str>, department: Option<&str>) -> bool {
        let _loading = self.begin();
        match self.api.update_user_data(name, email, phone, department).await {
            Ok(resp) if resp.status == UPDATE_SUCCESS_STATUS => {
                self.set_user(Some(resp.data.user));
                self.notifier.notify(Notification::positive(resp.data.message));
                true
            }
            Ok(resp) => {
                tracing::warn!(status = resp.status, "profile update returned unexpected status");
                false
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Change the password. Session state other than `loading` never changes.
    pub async fn update_password(&self, current_password: &str, new_password: &str) -> bool {
        let _loading = self.begin();
        match self.api.update_password(current_password, new_password).await {
            Ok(resp) if resp.status == UPDATE_SUCCESS_STATUS => {
                self.notifier.notify(Notification::positive(resp.data.message));
                true
            }
            Ok(resp) => {
                tracing::warn!(status = resp.status, "password update returned unexpected status");
                false
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn begin(&self) -> LoadingGuard<'_> {
        self.set_loading(true);
        LoadingGuard { store: self }
    }

    /// Set user and token under one write lock, then persist both.
    fn apply_credentials(&self, user: Option<User>, token: Option<String>) {
        let token = normalize_token(token);
        self.session.write(|s| {
            s.user.clone_from(&user);
            s.token.clone_from(&token);
        });
        self.persist_user(user.as_ref());
        self.persist_token(token.as_deref());
    }

    fn report(&self, err: &ApiError) {
        tracing::warn!(error = %err, "session operation failed");
        self.notifier.notify(Notification::negative(err.notification_message()));
    }

    fn persist_user(&self, user: Option<&User>) {
        if let Err(e) = storage::save_json(self.storage.as_ref(), USER_KEY, user) {
            tracing::warn!(error = %e, "failed to persist user");
        }
    }

    fn persist_token(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.storage.set(TOKEN_KEY, token),
            None => self.storage.remove(TOKEN_KEY),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist token");
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
