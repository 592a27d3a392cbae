//! Sign-up page: name, email, password with confirmation, plus provider buttons.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::controller::SubmissionController;
use crate::auth::flow;
use crate::auth::forms::{SignUpForm, SignUpInput};
use crate::auth::outcome::SIGN_IN_ROUTE;
use crate::auth::schema::Field;
use crate::components::form_alert::FormAlert;
use crate::components::social_buttons::SocialButtons;
use crate::components::text_field::TextField;
use crate::net::context::use_api_context;
use crate::net::types::SocialProvider;
use crate::state::auth::AuthState;
use crate::util::auth::{RouterNavigator, install_signed_in_redirect};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api_context();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());
    let navigator = RouterNavigator::new(navigate);

    let form = RwSignal::new(SubmissionController::<SignUpForm>::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let busy = Signal::derive(move || form.with(SubmissionController::busy));
    let alert = Signal::derive(move || form.with(|c| c.error_message().map(str::to_owned)));
    let field_error =
        move |field: Field| Signal::derive(move || form.with(|c| c.field_errors().get(field).map(str::to_owned)));

    let on_submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let input = SignUpInput {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            };
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
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Sign up with your email."</p>
                <form class="auth-form" novalidate=true on:submit=on_submit aria-busy=move || busy.get().to_string()>
                    <TextField
                        name="name"
                        label="Name"
                        autocomplete="name"
                        value=name
                        error=field_error(Field::Name)
                        disabled=busy
                    />
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
                        autocomplete="new-password"
                        value=password
                        error=field_error(Field::Password)
                        disabled=busy
                    />
                    <TextField
                        name="confirmPassword"
                        label="Confirm password"
                        input_type="password"
                        autocomplete="new-password"
                        value=confirm_password
                        error=field_error(Field::ConfirmPassword)
                        disabled=busy
                    />
                    <FormAlert message=alert />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <SocialButtons busy=busy on_select=on_social />
                <p class="auth-card__switch">
                    "Already have an account? " <a href=SIGN_IN_ROUTE>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
