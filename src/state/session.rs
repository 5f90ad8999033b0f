//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the remote identity for the home header and anything else that
//! renders per-user. The route guard re-queries the stored session itself;
//! this model only caches the resolved user within a mount.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Display name for the signed-in user, empty while unresolved.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(User::author_label).unwrap_or_default()
    }
}
