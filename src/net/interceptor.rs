//! Bearer-token request interceptor.

use std::sync::Arc;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::client::RequestHook;
use crate::error::ApiError;
use crate::session::Session;

/// Set `Authorization: Bearer <token>` when `token` is present and non-empty.
///
/// Headers are left untouched otherwise.
///
/// # Errors
///
/// Returns [`ApiError::Interceptor`] if the token is not a valid header value.
pub fn attach_bearer(token: Option<&str>, request: &mut Request) -> Result<(), ApiError> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| ApiError::Interceptor(e.to_string()))?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

/// Hook reading the session token at dispatch time.
#[must_use]
pub fn bearer_interceptor(session: Session) -> RequestHook {
    Arc::new(move |request: &mut Request| attach_bearer(session.token().as_deref(), request))
}

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod tests;
