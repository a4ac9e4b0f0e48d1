//! Typed REST client for the portal backend.
//!
//! Thin HTTP wrapper: one method per endpoint, one round trip per call.
//! Every request goes through a shared cookie jar so the `access_token`
//! cookie set by `/login` or `/register` rides along on later calls.
//!
//! ERROR HANDLING
//! ==============
//! Methods return `Result<_, ApiError>`. Status and body checks live here;
//! deciding what a failure means for the UI is left to `crate::services`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::types::{Event, LoginRequest, NewEvent, RegisterRequest, User};
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};

/// Name of the session cookie issued by the backend.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

// =============================================================================
// CLIENT
// =============================================================================

/// Cloning is cheap and clones share one connection pool and cookie jar.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base: Url,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client for the configured backend origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable or the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let jar = Arc::new(Jar::default());

        let mut builder = reqwest::Client::builder().cookie_provider(Arc::clone(&jar));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, jar, base, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Seed the jar with a previously issued session token.
    pub fn set_access_token(&self, token: &str) {
        self.jar
            .add_cookie_str(&format!("{ACCESS_TOKEN_COOKIE}={token}; Path=/"), &self.base);
    }

    /// Current session token held in the jar, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base)?;
        let raw = header.to_str().ok()?;
        find_cookie(raw, ACCESS_TOKEN_COOKIE).map(str::to_owned)
    }

    // -------------------------------------------------------------------------
    // Session endpoints
    // -------------------------------------------------------------------------

    /// `POST /login`. Succeeds only when the body carries a username.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint("/login"))
            .json(&LoginRequest { email, password });
        require_username(self.send_json(request).await?)
    }

    /// `POST /register`. Succeeds only when the body carries a username.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let request = self
            .http
            .post(self.config.endpoint("/register"))
            .json(&RegisterRequest { username, email, password });
        require_username(self.send_json(request).await?)
    }

    /// `POST /logout`. The response body is ignored.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.http.post(self.config.endpoint("/logout")))
            .await
            .map(drop)
    }

    /// `GET /verify-token`. Any 2xx JSON body is accepted as the current user.
    pub async fn verify_token(&self) -> Result<User, ApiError> {
        self.send_json(self.http.get(self.config.endpoint("/verify-token")))
            .await
    }

    // -------------------------------------------------------------------------
    // Resource endpoints
    // -------------------------------------------------------------------------

    /// `GET /db-test`. Returns whatever JSON the backend reports.
    pub async fn db_test(&self) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.http.get(self.config.endpoint("/db-test")))
            .await
    }

    /// `POST /create_event`. The response body is ignored.
    pub async fn create_event(&self, event: &NewEvent) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.config.endpoint("/create_event"))
            .json(event);
        self.send(request).await.map(drop)
    }

    /// `GET /get_events`.
    pub async fn get_events(&self) -> Result<Vec<Event>, ApiError> {
        self.send_json(self.http.get(self.config.endpoint("/get_events")))
            .await
    }

    // -------------------------------------------------------------------------
    // Plumbing
    // -------------------------------------------------------------------------

    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send(request).await?;
        parse_body(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(text)?)
}

fn require_username(user: User) -> Result<User, ApiError> {
    if user.is_valid() {
        Ok(user)
    } else {
        Err(ApiError::MissingField("username"))
    }
}

/// Pull one cookie value out of a `Cookie:` header (`a=1; b=2`).
pub(crate) fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
