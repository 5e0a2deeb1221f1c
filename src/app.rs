//! Todo Frontend App
//!
//! Hash-routed shell: one page at a time plus the toast stack.

use std::sync::Arc;

use leptos::prelude::*;
use todo_client::{ApiClient, ClientConfig, Route, Session};

use crate::components::Toaster;
use crate::context::AppContext;
use crate::notice::Toasts;
use crate::pages::{HomePage, LoginPage, RegisterPage, TodoPage};
use crate::storage::CookieStorage;

fn current_route() -> Route {
    Route::from_hash(&window().location().hash().unwrap_or_default())
}

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(current_route());

    let session = Session::new(Arc::new(CookieStorage));
    let client = ApiClient::new(ClientConfig::default(), session);
    log::info!("[APP] API origin {}", client.base_url());

    // Provide context to all children
    provide_context(AppContext::new((route, set_route), client, Toasts::new()));

    // Back/forward and manual hash edits; lives as long as the app
    let _listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = current_route();
        if route.get_untracked() != next {
            set_route.set(next);
        }
    });

    view! {
        <main class="app">
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Register => view! { <RegisterPage /> }.into_any(),
                Route::Todo => view! { <TodoPage /> }.into_any(),
            }}
            <Toaster />
        </main>
    }
}
