//! Todo Row Component
//!
//! One item: status checkbox, content, inline editor and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{EditableTodo, SyncError, Synced, TodoItem};

use crate::context::use_app_context;
use crate::store::{store_apply_mutation, store_set_busy, use_todo_store, TodoStateStoreFields, TodoStore};
use crate::notice::Toasts;

/// Run a mutation with the list marked busy, then apply its result
fn spawn_mutation<Fut>(store: TodoStore, toasts: Toasts, fallback: &'static str, mutation: Fut)
where
    Fut: std::future::Future<Output = Result<Synced, SyncError>> + 'static,
{
    store_set_busy(&store, true);
    spawn_local(async move {
        let result = mutation.await;
        store_apply_mutation(&store, &toasts, result, fallback);
        store_set_busy(&store, false);
    });
}

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let id = StoredValue::new(item.id.clone());
    let status = item.status;
    let created_on = item.created_on().unwrap_or_default();

    let is_editing = move || id.with_value(|id| EditableTodo::is_editing(&store.rows().read(), id));
    let draft = move || {
        id.with_value(|id| {
            EditableTodo::draft_of(&store.rows().read(), id)
                .unwrap_or_default()
                .to_string()
        })
    };

    let toggle = move |_| {
        let sync = ctx.sync();
        let id = id.get_value();
        spawn_mutation(store, ctx.toasts, "狀態已切換", async move { sync.toggle(&id).await });
    };

    let remove = move |_| {
        let sync = ctx.sync();
        let id = id.get_value();
        spawn_mutation(store, ctx.toasts, "已刪除待辦事項", async move { sync.delete(&id).await });
    };

    // Failed updates keep the row in edit mode; success rebuilds the rows
    let confirm_edit = move |_| {
        let sync = ctx.sync();
        let id = id.get_value();
        let content = draft();
        spawn_mutation(store, ctx.toasts, "已更新待辦事項", async move { sync.update(&id, &content).await });
    };

    view! {
        <li class="todo-row">
            <div class="todo-main">
                <input
                    type="checkbox"
                    prop:checked=status
                    prop:disabled=move || store.busy().get()
                    on:change=toggle
                />
                <span class=if status { "todo-content done" } else { "todo-content" }>
                    {item.content.clone()}
                </span>
                <span class="todo-date">{created_on}</span>
                <Show when=move || !is_editing()>
                    <button
                        class="edit-btn"
                        on:click=move |_| id.with_value(|id| EditableTodo::begin_edit(&mut store.rows().write(), id))
                    >
                        "✎"
                    </button>
                </Show>
                <button class="delete-btn" prop:disabled=move || store.busy().get() on:click=remove>"×"</button>
            </div>

            <Show when=is_editing>
                <div class="todo-editor">
                    <input
                        type="text"
                        prop:value=draft
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            id.with_value(|id| EditableTodo::set_draft(&mut store.rows().write(), id, &value));
                        }
                    />
                    <button class="confirm-btn" prop:disabled=move || store.busy().get() on:click=confirm_edit>
                        "確認修改"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |_| id.with_value(|id| EditableTodo::cancel_edit(&mut store.rows().write(), id))
                    >
                        "取消修改"
                    </button>
                </div>
            </Show>
        </li>
    }
}
