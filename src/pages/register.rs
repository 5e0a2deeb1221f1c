//! Register Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{sign_up, AuthError, RegisterForm, Route, ValidationError};

use crate::components::{field_error, FormField};
use crate::context::use_app_context;
use crate::notice::REGISTERED;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (loading, set_loading) = signal(false);

    let reset = move || {
        for field in [email, nickname, password, confirm] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            email: email.get(),
            nickname: nickname.get(),
            password: password.get(),
            confirm: confirm.get(),
        };
        if let Err(found) = form.validate() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        set_loading.set(true);

        let client = ctx.client();
        spawn_local(async move {
            let result = sign_up(&client, &form).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    ctx.toasts.success(REGISTERED);
                    reset();
                    ctx.navigate(Route::Login);
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
                <h1>"註冊帳號"</h1>
                <FormField label="Email" input_type="email" placeholder="請輸入Email"
                    value=email error=error_for("email") disabled=disabled />
                <FormField label="您的暱稱" input_type="text" placeholder="請輸入您的暱稱"
                    value=nickname error=error_for("nickname") disabled=disabled />
                <FormField label="密碼" input_type="password" placeholder="請輸入密碼"
                    value=password error=error_for("password") disabled=disabled />
                <FormField label="再次輸入密碼" input_type="password" placeholder="請再次輸入密碼"
                    value=confirm error=error_for("confirm") disabled=disabled />
                <div class="auth-actions">
                    <button type="submit" class="primary-btn" disabled=move || loading.get()>"註冊帳號"</button>
                    <button
                        type="button"
                        class="link-btn"
                        disabled=move || loading.get()
                        on:click=move |_| ctx.navigate(Route::Login)
                    >
                        "登入"
                    </button>
                </div>
            </form>
        </section>
    }
}
