//! Login Page
//!
//! Skips straight to the to-do page when the session is already valid.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{checkout, sign_in, AuthError, LoginForm, Page, Route, ValidationError};

use crate::components::{field_error, FormField};
use crate::context::use_app_context;
use crate::notice::welcome;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (loading, set_loading) = signal(false);

    // Checkout gate on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = checkout(&client).await;
            ctx.apply_gate(Page::Login, &outcome);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        if let Err(found) = form.validate() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        set_loading.set(true);

        let client = ctx.client();
        spawn_local(async move {
            let result = sign_in(&client, &form).await;
            set_loading.set(false);
            match result {
                Ok(signed_in) => {
                    ctx.toasts.success(welcome(&signed_in.nickname));
                    ctx.navigate(Route::Todo);
                }
                Err(AuthError::Invalid(found)) => errors.set(found),
                Err(e) => ctx.toasts.error(e.to_string()),
            }
        });
    };

    let disabled = Signal::derive(move || loading.get());
    let error_for = move |field: &'static str| Signal::derive(move || field_error(&errors.read(), field));

    view! {
        <section class="auth-page">
            <div class="auth-cover">
                <h1 class="logo">"ONLINE TODO LIST"</h1>
            </div>
            <form class="auth-form" on:submit=on_submit>
                <h1>"最實用的線上代辦事項服務"</h1>
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="請輸入Email"
                    value=email
                    error=error_for("email")
                    disabled=disabled
                />
                <FormField
                    label="Password"
                    input_type="password"
                    placeholder="請輸入密碼"
                    value=password
                    error=error_for("password")
                    disabled=disabled
                />
                <div class="auth-actions">
                    <button type="submit" class="primary-btn" disabled=move || loading.get()>"登入"</button>
                    <button
                        type="button"
                        class="link-btn"
                        disabled=move || loading.get()
                        on:click=move |_| ctx.navigate(Route::Register)
                    >
                        "註冊"
                    </button>
                </div>
            </form>
        </section>
    }
}
