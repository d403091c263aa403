//! Authenticated session: the shared handle and the store that mutates it.
//!
//! DESIGN
//! ======
//! [`Session`] is a cheap clonable handle over one lock. Readers (the request
//! interceptor, route guards, UI) hold clones; only [`SessionStore`] writes
//! through it. User and token change under a single write lock so a reader
//! never observes one from a new login paired with the other from an old one.

pub mod store;

pub use store::SessionStore;

use std::sync::{Arc, PoisonError, RwLock};

use crate::net::types::User;
use crate::storage::{self, KeyValueStorage, TOKEN_KEY, USER_KEY};

/// Point-in-time copy of the session fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while a use-case call is outstanding. Never persisted.
    pub loading: bool,
}

/// Shared handle to the process session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    /// Empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with the given credentials.
    #[must_use]
    pub fn with_credentials(user: Option<User>, token: Option<String>) -> Self {
        let state = SessionState { user, token: normalize_token(token), loading: false };
        Self { inner: Arc::new(RwLock::new(state)) }
    }

    /// Load user and token from their storage slots.
    ///
    /// Unreadable or corrupt slots are logged and treated as empty.
    pub fn restore(storage: &dyn KeyValueStorage) -> Self {
        let user = storage::load_json::<User>(storage, USER_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding persisted user");
            None
        });
        let token = storage.get(TOKEN_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding persisted token");
            None
        });
        let session = Self::with_credentials(user, token);
        tracing::info!(authenticated = session.is_authenticated(), "session restored");
        session
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read(SessionState::clone)
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read(|s| s.user.clone())
    }

    /// Current bearer token, read fresh on every call.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(|s| s.token.clone())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|s| s.loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|s| s.token.is_some())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read(|s| s.user.as_ref().is_some_and(User::is_admin))
    }

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

/// Blank tokens count as no token. Anything else is kept verbatim.
pub(crate) fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
