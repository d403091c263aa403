//! Error types shared by the HTTP client, services and session store.
//!
//! ERROR MAPPING
//! =============
//! Every use-case failure collapses into a single user-facing message via
//! [`ApiError::notification_message`]. Server-provided messages win, then the
//! local failure description, then the literal [`FALLBACK_MESSAGE`].

/// Message shown when an error carries nothing more specific.
pub const FALLBACK_MESSAGE: &str = "Error";

// =============================================================================
// API ERROR
// =============================================================================

/// Errors produced while dispatching a request to the REST API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Response {
        status: u16,
        /// The `message` field of the JSON error body, when present.
        message: Option<String>,
    },

    /// A success body could not be deserialized into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A pre-request hook rejected the outgoing request.
    #[error("request interceptor failed: {0}")]
    Interceptor(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// User-facing text for a negative notification. Never empty.
    #[must_use]
    pub fn notification_message(&self) -> String {
        let text = match self {
            Self::Response { message, .. } => message.as_deref().unwrap_or_default(),
            Self::Transport(desc) | Self::Decode(desc) | Self::Interceptor(desc) | Self::ClientBuild(desc) => desc.as_str(),
        };
        if text.trim().is_empty() { FALLBACK_MESSAGE.to_owned() } else { text.to_owned() }
    }

    /// HTTP status of a server-side failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::ClientBuild(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// =============================================================================
// STORAGE ERROR
// =============================================================================

/// Errors produced by persistent key-value storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failed for `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage value for `{key}` is not valid JSON: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// CONFIG ERROR
// =============================================================================

/// Errors produced while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// NAVIGATION ERROR
// =============================================================================

/// Reasons a named-route navigation is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("route {0} requires an authenticated session")]
    Unauthenticated(&'static str),

    #[error("route {0} is restricted to administrators")]
    Forbidden(&'static str),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
