//! Secondary sign-in affordances for external identity providers.

use leptos::prelude::*;

use crate::net::types::SocialProvider;

/// One button per provider. All of them are disabled while `busy`.
#[component]
pub fn SocialButtons<F>(#[prop(into)] busy: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn(SocialProvider) + Clone + 'static,
{
    let buttons = SocialProvider::ALL
        .into_iter()
        .map(|provider| {
            let on_select = on_select.clone();
            view! {
                <button
                    class="auth-social__button"
                    type="button"
                    data-provider=provider.id()
                    disabled=move || busy.get()
                    on:click=move |_| {
                        if !busy.get_untracked() {
                            on_select(provider);
                        }
                    }
                >
                    {provider.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="auth-social">
            <p class="auth-social__divider">"Or"</p>
            {buttons}
        </div>
    }
}
