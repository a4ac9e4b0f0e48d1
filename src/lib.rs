//! # portal-client
//!
//! Client-side data access for the event portal front-end. Wraps the
//! backend's auth and event endpoints, keeps the logged-in flag and current
//! user in observable cells, and fires navigation on the success paths.
//!
//! Layers, bottom up:
//! - [`net`]: wire types and the typed `ApiClient` (`Result<_, ApiError>`)
//! - [`state`]: observable session cells
//! - [`nav`]: the navigation seam
//! - [`services`]: UI-facing operations that never return `ApiError`

pub mod config;
pub mod context;
pub mod error;
pub mod nav;
pub mod net;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use context::PortalContext;
pub use error::{ApiError, ConfigError};
pub use nav::{HOME, History, Navigator};
pub use net::api::ApiClient;
pub use net::types::{Event, NewEvent, User};
pub use services::auth::{AuthAction, AuthFailure};
pub use state::{AuthState, Observable, SessionStore};
