//! Home Page
//!
//! Checkout gate: spinner until the session is validated or refused.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{checkout, Page};

use crate::context::use_app_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = checkout(&client).await;
            ctx.apply_gate(Page::Home, &outcome);
        });
    });

    view! {
        <div class="page-loading">
            <div class="spinner"></div>
        </div>
    }
}
