//! Form-level alert for backend failures.

use leptos::prelude::*;

/// Renders `message` in an assertive live region while it is present.
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="auth-alert" role="alert" aria-live="assertive">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
