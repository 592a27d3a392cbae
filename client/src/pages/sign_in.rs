//! Sign-in page: email + password, plus provider buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `SubmissionController<SignInForm>` for as long as the page is
//! mounted. Every submit and provider click goes through that controller, so
//! the single-flight and error-clearing rules hold for both.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::controller::SubmissionController;
use crate::auth::flow;
use crate::auth::forms::{SignInForm, SignInInput};
use crate::auth::outcome::SIGN_UP_ROUTE;
use crate::auth::schema::Field;
use crate::components::form_alert::FormAlert;
use crate::components::social_buttons::SocialButtons;
use crate::components::text_field::TextField;
use crate::net::context::use_api_context;
use crate::net::types::SocialProvider;
use crate::state::auth::AuthState;
use crate::util::auth::{RouterNavigator, install_signed_in_redirect};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api_context();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());
    let navigator = RouterNavigator::new(navigate);

    let form = RwSignal::new(SubmissionController::<SignInForm>::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let busy = Signal::derive(move || form.with(SubmissionController::busy));
    let alert = Signal::derive(move || form.with(|c| c.error_message().map(str::to_owned)));
    let field_error =
        move |field: Field| Signal::derive(move || form.with(|c| c.field_errors().get(field).map(str::to_owned)));

    let on_submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let input = SignInInput { email: email.get_untracked(), password: password.get_untracked() };
            let api = api.clone();
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                flow::submit(&form, api.auth(), &navigator, input).await;
            });
        }
    };

    let on_social = move |provider: SocialProvider| {
        let api = api.clone();
        let navigator = navigator.clone();
        leptos::task::spawn_local(async move {
            flow::submit_social(&form, api.auth(), &navigator, provider).await;
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Welcome back. Sign in with your email."</p>
                <form class="auth-form" novalidate=true on:submit=on_submit aria-busy=move || busy.get().to_string()>
                    <TextField
                        name="email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        value=email
                        error=field_error(Field::Email)
                        disabled=busy
                    />
                    <TextField
                        name="password"
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        error=field_error(Field::Password)
                        disabled=busy
                    />
                    <FormAlert message=alert />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <SocialButtons busy=busy on_select=on_social />
                <p class="auth-card__switch">
                    "No account yet? " <a href=SIGN_UP_ROUTE>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
