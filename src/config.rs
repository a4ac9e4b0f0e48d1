//! Client configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BASE_URL_VAR: &str = "PORTAL_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "PORTAL_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "PORTAL_CONNECT_TIMEOUT_SECS";

/// Optional HTTP timeouts. `None` means the request may wait indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `PORTAL_API_URL`: backend origin, default `http://localhost:8000`
    /// - `PORTAL_REQUEST_TIMEOUT_SECS`: whole-request timeout, unset by default
    /// - `PORTAL_CONNECT_TIMEOUT_SECS`: connect timeout, unset by default
    ///
    /// Timeouts must be positive; leave them unset to wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or a timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR).ok();
        let request = std::env::var(REQUEST_TIMEOUT_VAR).ok();
        let connect = std::env::var(CONNECT_TIMEOUT_VAR).ok();
        Self::from_parts(base_url.as_deref(), request.as_deref(), connect.as_deref())
    }

    /// Build config from raw optional values, as supplied by env or CLI flags.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_parts(
        base_url: Option<&str>,
        request_secs: Option<&str>,
        connect_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeouts: Timeouts {
                request_secs: parse_secs(REQUEST_TIMEOUT_VAR, request_secs)?,
                connect_secs: parse_secs(CONNECT_TIMEOUT_VAR, connect_secs)?,
            },
        })
    }

    /// Join a path such as `/login` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BASE_URL);
    let trimmed = raw.trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidBaseUrl { url: raw.to_owned(), reason: e.to_string() })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_secs(var: &'static str, raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(secs)),
            _ => Err(ConfigError::InvalidNumber { var, value: value.to_owned() }),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
