#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::observable::Observable;
use crate::net::types::User;

/// Point-in-time copy of the session cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub logged_in: bool,
    pub user: Option<User>,
}

/// The two shared session cells read by UI components.
///
/// Only `crate::services::auth` writes them. Both start logged out.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    pub logged_in: Observable<bool>,
    pub current_user: Observable<Option<User>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write both cells. Readers may briefly see the new flag with the old user.
    pub fn update_log_status(&self, logged_in: bool, user: Option<User>) {
        self.logged_in.set(logged_in);
        self.current_user.set(user);
    }

    pub fn clear(&self) {
        self.update_log_status(false, None);
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current_user.get()
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        AuthState { logged_in: self.is_logged_in(), user: self.current_user() }
    }
}
