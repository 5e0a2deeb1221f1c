//! Todo List Component
//!
//! Rows visible under the selected tab, plus the footer with the count
//! and the clear-finished action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{ClearOutcome, TodoItem};

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::notice::clear_notices;
use crate::store::{store_replace_todos, store_set_busy, use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let visible = move || -> Vec<TodoItem> {
        let filter = store.filter().get();
        store
            .todos()
            .read()
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    };
    let finished_visible = move || visible().iter().filter(|item| item.status).count();

    let clear_finished = move |_| {
        let todos = store.todos().get();
        let filter = store.filter().get();
        store_set_busy(&store, true);

        let sync = ctx.sync();
        spawn_local(async move {
            let outcome = sync.clear_finished(&todos, filter).await;
            ctx.toasts.show_all(clear_notices(&outcome));
            if let ClearOutcome::Cleared { todos: Ok(todos), .. } = outcome {
                store_replace_todos(&store, todos);
            }
            store_set_busy(&store, false);
        });
    };

    view! {
        <ul class="todo-list">
            <For
                each=visible
                key=|item| (item.id.clone(), item.content.clone(), item.status)
                children=move |item| view! { <TodoRow item=item /> }
            />
            <li class="todo-footer">
                <h3>{move || store.filter().get().summary(visible().len())}</h3>
                <Show when=move || store.filter().get().allows_clear()>
                    <button
                        type="button"
                        class="clear-btn"
                        disabled=move || finished_visible() == 0 || store.busy().get()
                        on:click=clear_finished
                    >
                        "清除已完成項目"
                    </button>
                </Show>
            </li>
        </ul>
    }
}
