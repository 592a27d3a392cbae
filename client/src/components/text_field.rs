//! Labeled input bound to a string signal, with an inline field error.

use leptos::prelude::*;

#[component]
pub fn TextField(
    /// DOM id / name of the input.
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let error_id = format!("{name}-error");
    let described_by = error_id.clone();
    view! {
        <div class="auth-field" class=("auth-field--invalid", move || error.get().is_some())>
            <label class="auth-field__label" for=name>{label}</label>
            <input
                class="auth-field__input"
                id=name
                name=name
                type=input_type
                autocomplete=autocomplete
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=described_by
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="auth-field__error" id=error_id.clone()>
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
