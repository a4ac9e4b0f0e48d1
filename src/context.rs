//! Everything a service call needs, bundled for cheap cloning.
//!
//! DESIGN
//! ======
//! One `PortalContext` per UI process plays the role of the process-wide
//! stores: clones share the cookie jar, the session cells, and the navigator.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::nav::{History, Navigator};
use crate::net::api::ApiClient;
use crate::state::SessionStore;

#[derive(Clone)]
pub struct PortalContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub navigator: Arc<dyn Navigator>,
}

impl PortalContext {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        Ok(Self { api: ApiClient::new(config)?, session: SessionStore::new(), navigator })
    }

    /// Context backed by an in-memory [`History`], returned alongside it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_history(config: ClientConfig) -> Result<(Self, History), ApiError> {
        let history = History::new();
        let ctx = Self::new(config, Arc::new(history.clone()))?;
        Ok((ctx, history))
    }
}
