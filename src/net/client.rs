//! Shared HTTP client with a fixed base URL and pre-request hooks.
//!
//! ARCHITECTURE
//! ============
//! Every call builds a `reqwest::Request`, runs each registered hook against
//! it in registration order, then executes it. Hooks run at dispatch time, so
//! anything they read (the session token) is current for that request.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Response`] carrying the `message`
//! field of the JSON body when the server sent one.

use std::sync::Arc;

use reqwest::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ApiResponse, ErrorBody};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Pre-request hook. May mutate the request or abort dispatch with an error.
pub type RequestHook = Arc<dyn Fn(&mut Request) -> Result<(), ApiError> + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    hooks: Vec<RequestHook>,
}

impl ApiClient {
    /// Build a client for `config.base_url` with the configured timeouts and no hooks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), hooks: Vec::new() })
    }

    /// Append a hook that runs before every request.
    #[must_use]
    pub fn with_interceptor(mut self, hook: RequestHook) -> Self {
        self.hooks.push(hook);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path relative to the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(self.http.request(Method::GET, self.url(path))).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.request(Method::POST, self.url(path)).json(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.request(Method::PUT, self.url(path)).json(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(self.http.request(Method::DELETE, self.url(path))).await
    }

    /// Run hooks, dispatch, and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Interceptor`] when a hook rejects the request (nothing is sent)
    /// - [`ApiError::Transport`] when no response arrives
    /// - [`ApiError::Response`] for non-2xx statuses
    /// - [`ApiError::Decode`] when a 2xx body does not match `T`
    pub async fn send<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<ApiResponse<T>, ApiError> {
        let mut request = builder.build()?;
        self.apply_hooks(&mut request)?;

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !response_is_success(status) {
            tracing::warn!(%method, %url, status, "request failed");
            return Err(error_from_body(status, &text));
        }

        let data = decode_body(&text)?;
        Ok(ApiResponse { status, data })
    }

    fn apply_hooks(&self, request: &mut Request) -> Result<(), ApiError> {
        for hook in &self.hooks {
            hook(request)?;
        }
        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() { base.to_owned() } else { format!("{base}/{path}") }
}

fn response_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());
    ApiError::Response { status, message }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    // Empty 2xx bodies decode as JSON null.
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
