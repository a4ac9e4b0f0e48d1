//! Error types for the portal client.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is what the typed [`crate::net::api::ApiClient`] returns. The
//! session and resource services never hand it to callers: they log it and
//! turn it into a fixed message, a `None`, or a logged-out session.

/// Errors produced by raw backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    /// A 2xx body was missing a field the caller depends on.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),

    /// A 2xx body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The client was handed a config that does not describe a usable backend.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors produced while reading client configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid value for {var}: `{value}`")]
    InvalidNumber { var: &'static str, value: String },
}
