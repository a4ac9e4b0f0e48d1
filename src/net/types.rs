//! Wire types shared by the API client, services, and UI state.

use serde::{Deserialize, Deserializer, Serialize};

/// A user account as returned by `/login`, `/register`, and `/verify-token`.
///
/// Only `username` is inspected by the client; the rest rides along for
/// display. Unknown fields are kept in `extra`. A body that is not a JSON
/// object (e.g. `null`) or has a non-string `username` does not decode, so
/// `/verify-token` treats it as a failed verification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Whether the backend returned a usable account (non-empty username).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.username.is_empty()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Body of `POST /create_event`. Sent verbatim; nothing is validated locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub create_by: String,
}

/// One entry of `GET /get_events`.
///
/// Times are whatever string the backend rendered (`%Y-%m-%d %H:%M:%S`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_by: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
