//! UI-facing operations.
//!
//! DESIGN
//! ======
//! Free functions over a `&PortalContext`, grouped by domain. Each wraps one
//! `ApiClient` call with the catch-and-log behavior the UI expects: no
//! `ApiError` escapes this layer.

pub mod auth;
pub mod events;
pub mod health;
