//! To-Do Page
//!
//! Protected page: checkout gate, then the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_client::{checkout, Page, TodoSync};

use crate::components::{FilterTabs, NavBar, NewTodoForm, TodoList};
use crate::context::use_app_context;
use crate::store::{store_apply_list, TodoState, TodoStateStoreFields};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(TodoState::default());
    provide_context(store);

    // Checkout gate, then the first fetch
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let outcome = checkout(&client).await;
            // Already navigated away
            if store.is_disposed() {
                return;
            }
            let decision = ctx.apply_gate(Page::Todo, &outcome);
            if decision.load_todos {
                let result = TodoSync::new(client).list().await;
                store_apply_list(&store, &ctx.toasts, result);
            }
        });
    });

    let has_todos = move || !store.todos().read().is_empty();

    view! {
        <section class="todo-page">
            <NavBar />
            <div class="todo-container">
                <NewTodoForm />
                <Show
                    when=has_todos
                    fallback=|| view! {
                        <div class="todo-empty">
                            <h2>"目前尚無待辦事項"</h2>
                        </div>
                    }
                >
                    <div class="todo-card">
                        <FilterTabs />
                        <TodoList />
                    </div>
                </Show>
            </div>
        </section>
    }
}
