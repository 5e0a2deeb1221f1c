//! Form Field Component
//!
//! Labelled input bound to a signal, with an inline validation message.

use leptos::prelude::*;
use todo_client::ValidationError;

/// First validation message for `field`
pub fn field_error(errors: &[ValidationError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field() == field).map(|e| e.to_string())
}

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </label>
    }
}
