//! Post-resolution routing.
//!
//! A successful submission produces exactly one `Destination`; a failed one
//! produces none and its message stays in the controller until the next
//! submit.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::backend::AuthSuccess;

/// Authenticated landing route.
pub const LANDING_ROUTE: &str = "/";
/// Where unauthenticated visitors are sent.
pub const SIGN_IN_ROUTE: &str = "/sign-in";
pub const SIGN_UP_ROUTE: &str = "/sign-up";

/// Navigation collaborator. Fire-and-forget.
pub trait Navigator {
    /// In-app route change.
    fn navigate_to(&self, path: &str);

    /// Full-page load of an external URL.
    fn redirect_to(&self, url: &str) {
        self.navigate_to(url);
    }
}

/// Where the browser goes after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Route(String),
    External(String),
}

impl Destination {
    pub fn apply(&self, navigator: &(impl Navigator + ?Sized)) {
        match self {
            Self::Route(path) => navigator.navigate_to(path),
            Self::External(url) => navigator.redirect_to(url),
        }
    }
}

/// Maps successful outcomes to destinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRouter {
    landing: String,
}

impl Default for OutcomeRouter {
    fn default() -> Self {
        Self::new(LANDING_ROUTE)
    }
}

impl OutcomeRouter {
    pub fn new(landing: impl Into<String>) -> Self {
        Self { landing: landing.into() }
    }

    pub fn landing(&self) -> &str {
        &self.landing
    }

    /// A backend-supplied redirect wins over the landing route.
    pub fn destination(&self, success: &AuthSuccess) -> Destination {
        match success.redirect.as_deref() {
            Some(url) if !url.is_empty() => Destination::External(url.to_owned()),
            _ => Destination::Route(self.landing.clone()),
        }
    }
}
