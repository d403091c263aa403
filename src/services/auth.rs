//! Authentication and account endpoints.
//!
//! Routes:
//! - `POST auth/login`
//! - `POST auth/register`
//! - `PUT user/`
//! - `PUT user/password`

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::{ApiResponse, AuthPayload, MessagePayload, UserPayload};

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const USER_PATH: &str = "user/";
const PASSWORD_PATH: &str = "user/password";

/// Remote calls behind the session use-cases.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<AuthPayload>, ApiError>;

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        organization_name: &str,
    ) -> Result<ApiResponse<AuthPayload>, ApiError>;

    async fn update_user_data(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        department: Option<&str>,
    ) -> Result<ApiResponse<UserPayload>, ApiError>;

    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ApiResponse<MessagePayload>, ApiError>;
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "nameEnterprise")]
    name_enterprise: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    department: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct UpdatePasswordRequest<'a> {
    #[serde(rename = "passwordActual")]
    password_actual: &'a str,
    #[serde(rename = "passwordNew")]
    password_new: &'a str,
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

/// [`AuthApi`] over the shared [`ApiClient`].
#[derive(Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<ApiResponse<AuthPayload>, ApiError> {
        self.client.post(LOGIN_PATH, &LoginRequest { email, password }).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        organization_name: &str,
    ) -> Result<ApiResponse<AuthPayload>, ApiError> {
        let body = RegisterRequest { name, email, password, name_enterprise: organization_name };
        self.client.post(REGISTER_PATH, &body).await
    }

    async fn update_user_data(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        department: Option<&str>,
    ) -> Result<ApiResponse<UserPayload>, ApiError> {
        self.client.put(USER_PATH, &UpdateUserRequest { name, email, phone, department }).await
    }

    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ApiResponse<MessagePayload>, ApiError> {
        let body = UpdatePasswordRequest { password_actual: current_password, password_new: new_password };
        self.client.put(PASSWORD_PATH, &body).await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
