//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: the landing page sends
//! signed-out visitors to sign-in, the auth screens send signed-in visitors to
//! the landing page. `RouterNavigator` adapts the Leptos router to the
//! `Navigator` seam used by submission flows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

#[cfg(feature = "hydrate")]
use crate::auth::backend::AuthBackend;
use crate::auth::outcome::{LANDING_ROUTE, Navigator, SIGN_IN_ROUTE};
use crate::net::context::ApiContext;
use crate::state::auth::AuthState;

/// True once auth has loaded and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// True once auth has loaded and somebody is signed in.
pub fn should_redirect_signed_in(state: &AuthState) -> bool {
    !state.loading && state.session.is_some()
}

/// Redirect to the sign-in screen whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the landing route whenever a session is already present.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_signed_in(&auth.get()) {
            navigate(LANDING_ROUTE, NavigateOptions::default());
        }
    });
}

/// Mark auth as loading and look the session up again, unless a lookup is
/// already in flight. Server renders keep the loading state; the browser
/// resolves it.
pub fn refresh_session(auth: RwSignal<AuthState>, api: ApiContext) {
    if auth.try_update(AuthState::begin_refresh) != Some(true) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = api.auth().current_session().await;
        auth.set(AuthState { session, loading: false });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}

/// `Navigator` over the Leptos router; external URLs get a full page load.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn redirect_to(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
