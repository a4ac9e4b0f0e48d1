//! Session client: login, register, logout, token verification.
//!
//! ARCHITECTURE
//! ============
//! Each call is one round trip through `ApiClient`, then a write to the
//! session cells and, on the success paths, a navigation to `/`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `ApiError`. Login and register collapse failures into
//! an [`AuthFailure`] whose `Display` is the message shown in the form.
//! Logout always ends logged out. Verify falls back to logout on any failure.

use std::fmt;

use crate::context::PortalContext;
use crate::error::ApiError;
use crate::nav::HOME;
use crate::net::types::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Register => "registration",
        })
    }
}

/// User-facing outcome of a failed login or register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// Non-2xx status, or a 2xx body without a username.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Transport failure or an unreadable body.
    #[error("An error occurred during {0}")]
    Unexpected(AuthAction),
}

/// `POST /login` and update the session.
///
/// # Errors
///
/// Returns the message to display when the backend rejects the credentials
/// or cannot be reached. Session state is left untouched in that case.
pub async fn login(ctx: &PortalContext, email: &str, password: &str) -> Result<User, AuthFailure> {
    let result = ctx.api.login(email, password).await;
    complete_auth(ctx, AuthAction::Login, result)
}

/// `POST /register` and update the session.
///
/// # Errors
///
/// Same as [`login`]. A taken username surfaces as
/// [`AuthFailure::InvalidCredentials`].
pub async fn register(ctx: &PortalContext, username: &str, email: &str, password: &str) -> Result<User, AuthFailure> {
    let result = ctx.api.register(username, email, password).await;
    complete_auth(ctx, AuthAction::Register, result)
}

fn complete_auth(ctx: &PortalContext, action: AuthAction, result: Result<User, ApiError>) -> Result<User, AuthFailure> {
    match result {
        Ok(user) => {
            tracing::info!(%action, username = %user.username, "authenticated");
            ctx.session.update_log_status(true, Some(user.clone()));
            ctx.navigator.navigate(HOME);
            Ok(user)
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!(%action, status, "credentials rejected");
            Err(AuthFailure::InvalidCredentials)
        }
        Err(ApiError::MissingField(field)) => {
            tracing::warn!(%action, field, "auth response missing field");
            Err(AuthFailure::InvalidCredentials)
        }
        Err(e) => {
            tracing::error!(%action, error = %e, "error during {action}");
            Err(AuthFailure::Unexpected(action))
        }
    }
}

/// `POST /logout`, then clear the session and navigate home regardless of
/// how the request went.
pub async fn logout(ctx: &PortalContext) {
    match ctx.api.logout().await {
        Ok(()) => tracing::info!("logged out"),
        Err(ApiError::Status { status, .. }) => tracing::error!(status, "logout failed on the server"),
        Err(e) => tracing::error!(error = %e, "error during logout"),
    }
    ctx.session.clear();
    ctx.navigator.navigate(HOME);
}

/// `GET /verify-token`. On success the session is populated from the body;
/// on any failure [`logout`] runs. Returns whether the session is valid.
pub async fn verify_token(ctx: &PortalContext) -> bool {
    match ctx.api.verify_token().await {
        Ok(user) => {
            ctx.session.update_log_status(true, Some(user));
            true
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::info!(status, "session token rejected");
            logout(ctx).await;
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "error verifying token");
            logout(ctx).await;
            false
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
