//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where successful sign-in and sign-up land. It re-reads the session
//! on mount (the auth screens invalidate the cache on success), redirects to
//! sign-in when nobody is signed in, and offers sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::backend::AuthBackend;
use crate::net::context::use_api_context;
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, refresh_session};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api_context();
    let navigate = use_navigate();

    refresh_session(auth, api.clone());
    install_unauth_redirect(auth, navigate);

    let signing_out = RwSignal::new(false);
    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let api = api.clone();
        // Clearing the session hands navigation to the unauth redirect.
        leptos::task::spawn_local(async move {
            if let Err(err) = api.auth().sign_out().await {
                log::warn!("sign-out failed: {err}");
            }
            api.sessions().clear();
            auth.set(AuthState::default());
            signing_out.set(false);
        });
    };

    let display_name = move || {
        auth.get()
            .user()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };
    let display_email = move || {
        auth.get()
            .user()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_signed_in()
            fallback=|| view! { <div class="auth-page"><p class="auth-loading">"Loading..."</p></div> }
        >
            <div class="home-page">
                <header class="home-header">
                    <h1>"Welcome, " {display_name}</h1>
                    <p class="home-header__email">{display_email}</p>
                </header>
                <button
                    class="auth-button auth-button--secondary"
                    type="button"
                    disabled=move || signing_out.get()
                    on:click=on_sign_out.clone()
                >
                    "Sign out"
                </button>
            </div>
        </Show>
    }
}
