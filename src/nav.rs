//! Navigation side effects.
//!
//! Services call [`Navigator::navigate`] after a successful login, register,
//! logout, or event creation. A UI supplies its own router; [`History`] is
//! the in-memory implementation used by the CLI and tests.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use tokio::sync::watch;

use crate::state::Observable;

/// Route the UI lands on after auth changes.
pub const HOME: &str = "/";

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Records every navigation and exposes the current route as a cell.
#[derive(Clone, Debug)]
pub struct History {
    current: Observable<String>,
    visited: Observable<Vec<String>>,
}

impl Default for History {
    fn default() -> Self {
        Self { current: Observable::new(HOME.to_owned()), visited: Observable::default() }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.current.get()
    }

    /// Every path navigated to, oldest first.
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }
}

impl Navigator for History {
    fn navigate(&self, path: &str) {
        tracing::debug!(%path, "navigate");
        self.visited.update(|v| v.push(path.to_owned()));
        self.current.set(path.to_owned());
    }
}
