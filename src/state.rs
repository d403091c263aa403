//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` wires every collaborator explicitly: the session is restored
//! from storage first, the HTTP client gets a bearer hook over that session,
//! and the store, router and services all share the same handles. There are
//! no globals; front ends hold an `AppState` and clone it where needed.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::interceptor::bearer_interceptor;
use crate::notify::NotificationLog;
use crate::router::Router;
use crate::services::{DepartmentService, EnterpriseService, HttpAuthApi};
use crate::session::{Session, SessionStore};
use crate::storage::{FileStorage, KeyValueStorage};

/// Clone is cheap: all inner fields are Arc-wrapped or Clone handles.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub session: Session,
    pub client: ApiClient,
    pub store: Arc<SessionStore>,
    pub router: Arc<Router>,
    pub notifications: NotificationLog,
    pub departments: DepartmentService,
    pub enterprise: EnterpriseService,
}

impl AppState {
    /// Wire the client over the given storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, storage: Arc<dyn KeyValueStorage>) -> Result<Self, ApiError> {
        let session = Session::restore(storage.as_ref());
        let client = ApiClient::new(&config)?.with_interceptor(bearer_interceptor(session.clone()));
        let notifications = NotificationLog::new();
        let router = Arc::new(Router::new(session.clone()));

        let store = Arc::new(SessionStore::new(
            session.clone(),
            Arc::new(HttpAuthApi::new(client.clone())),
            storage,
            Arc::new(notifications.clone()),
            router.clone(),
        ));

        Ok(Self {
            departments: DepartmentService::new(client.clone()),
            enterprise: EnterpriseService::new(client.clone()),
            config,
            session,
            client,
            store,
            router,
            notifications,
        })
    }

    /// Wire the client with file-backed session slots under `config.storage_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
        Self::new(config, storage)
    }
}
