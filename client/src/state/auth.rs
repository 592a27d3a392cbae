//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the landing page to coordinate redirects and
//! identity-dependent rendering. Submission state is not kept here; each
//! form owns its own controller.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Current session and whether a lookup is in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first session lookup has answered.
    pub fn loading() -> Self {
        Self { session: None, loading: true }
    }

    /// Mark a lookup as started. Returns `false` when one is already in
    /// flight, so concurrent callers share the answer of the first.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
