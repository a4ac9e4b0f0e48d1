//! Resource client for events.

use crate::context::PortalContext;
use crate::error::ApiError;
use crate::nav::HOME;
use crate::net::types::{Event, NewEvent};

/// `POST /create_event`, then navigate home.
///
/// Failures are logged and swallowed; the return value only tells the caller
/// whether the backend accepted the event.
pub async fn create_event(ctx: &PortalContext, event: &NewEvent) -> bool {
    match ctx.api.create_event(event).await {
        Ok(()) => {
            tracing::info!(name = %event.name, "event created");
            ctx.navigator.navigate(HOME);
            true
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!(status, name = %event.name, "event rejected");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "error creating event");
            false
        }
    }
}

/// `GET /get_events`. `None` on any failure, never an error.
pub async fn get_events(ctx: &PortalContext) -> Option<Vec<Event>> {
    match ctx.api.get_events().await {
        Ok(events) => Some(events),
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!(status, "event listing failed");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching events");
            None
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
