//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::context::provide_api_context;
use crate::pages::{home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::auth::AuthState;
use crate::util::auth::refresh_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API context and session state, then sets up client-side
/// routing for the landing page and the two auth screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = provide_api_context();
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    refresh_session(auth, api);

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
