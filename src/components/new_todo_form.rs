//! New Todo Form Component
//!
//! Input for creating items. Cleared only when the create succeeds.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::notice::CREATED;
use crate::store::{store_apply_mutation, store_set_busy, use_todo_store, TodoStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let content = new_text.get();
        store_set_busy(&store, true);

        let sync = ctx.sync();
        spawn_local(async move {
            let result = sync.create(&content).await;
            if store_apply_mutation(&store, &ctx.toasts, result, CREATED) {
                set_new_text.set(String::new());
            }
            store_set_busy(&store, false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="新增待辦事項"
                title="內容不能為空或只包含空白字符"
                prop:value=move || new_text.get()
                prop:disabled=move || store.busy().get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" disabled=move || store.busy().get()>"+"</button>
        </form>
    }
}
