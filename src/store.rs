//! To-Do Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{EditableTodo, SyncError, Synced, TodoFilter, TodoItem};

use crate::notice::{mutation_notices, Toasts};

/// State of the to-do page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Last fetched list, always replaced wholesale
    pub todos: Vec<TodoItem>,
    /// Edit projection rebuilt from `todos`
    pub rows: Vec<EditableTodo>,
    /// Selected tab
    pub filter: TodoFilter,
    /// A request started from the list is in flight
    pub busy: bool,
}

pub type TodoStore = Store<TodoState>;

pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Responses can land after the page that owns the store is gone
fn store_alive(store: &TodoStore) -> bool {
    if store.is_disposed() {
        log::debug!("[STORE] page disposed, dropping late result");
        return false;
    }
    true
}

pub fn store_set_busy(store: &TodoStore, busy: bool) {
    if store_alive(store) {
        *store.busy().write() = busy;
    }
}

/// Replace the cached list and reset every row's edit state
pub fn store_replace_todos(store: &TodoStore, todos: Vec<TodoItem>) {
    if !store_alive(store) {
        return;
    }
    *store.rows().write() = EditableTodo::project(&todos);
    *store.todos().write() = todos;
}

/// Load the list, surfacing the server message on failure
pub fn store_apply_list(store: &TodoStore, toasts: &Toasts, result: Result<Vec<TodoItem>, SyncError>) {
    match result {
        Ok(todos) => store_replace_todos(store, todos),
        Err(e) => toasts.error(e.to_string()),
    }
}

/// Show notices for a mutation and take the re-fetched list if there is one.
/// Returns true when the mutation itself succeeded.
pub fn store_apply_mutation(
    store: &TodoStore,
    toasts: &Toasts,
    result: Result<Synced, SyncError>,
    fallback: &str,
) -> bool {
    toasts.show_all(mutation_notices(&result, fallback));
    match result {
        Ok(Synced { todos: Ok(todos), .. }) => {
            store_replace_todos(store, todos);
            true
        }
        Ok(_) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, status: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            create_time: 1_700_000_000,
            content: format!("item {}", id),
            status,
        }
    }

    #[test]
    fn test_replace_rebuilds_rows() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TodoState::default());

        store_replace_todos(&store, vec![item("a", false), item("b", true)]);

        assert_eq!(store.todos().read_untracked().len(), 2);
        assert_eq!(store.rows().read_untracked().len(), 2);
    }

    #[test]
    fn test_late_result_after_page_disposed_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TodoState::default());
        store_set_busy(&store, true);

        owner.cleanup();
        assert!(store.is_disposed());

        store_replace_todos(&store, vec![item("a", false)]);
        store_set_busy(&store, false);
    }
}
