//! Navigation Bar Component
//!
//! Logo, the signed-in nickname and the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{sign_out, Route};

use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let nickname = ctx.client().session().nickname().unwrap_or_default();
    let (loading, set_loading) = signal(false);

    let logout = move |_| {
        set_loading.set(true);
        let client = ctx.client();
        spawn_local(async move {
            let result = sign_out(&client).await;
            set_loading.set(false);
            match result {
                Ok(message) => {
                    ctx.toasts.success(message.unwrap_or_else(|| "已登出".to_string()));
                    ctx.navigate(Route::Home);
                }
                Err(e) => ctx.toasts.error(e.to_string()),
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <button class="logo" on:click=move |_| ctx.navigate(Route::Home)>
                "ONLINE TODO LIST"
            </button>
            <div class="nav-actions">
                <h2>{format!("{}的待辦", nickname)}</h2>
                <button
                    class=move || if loading.get() { "logout-btn loading" } else { "logout-btn" }
                    disabled=move || loading.get()
                    on:click=logout
                >
                    "登出"
                </button>
            </div>
        </nav>
    }
}
