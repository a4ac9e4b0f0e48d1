//! Backend database connectivity probe.

use crate::context::PortalContext;
use crate::error::ApiError;

/// `GET /db-test`. Logs the outcome and reports reachability.
pub async fn db_test(ctx: &PortalContext) -> bool {
    match ctx.api.db_test().await {
        Ok(data) => {
            tracing::info!(%data, "db test ok");
            true
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!(status, "db test failed");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "error during db test");
            false
        }
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
