//! Inline Edit Projection
//!
//! Per-row edit state built from a fresh list. Rebuilding after a re-fetch
//! resets every row to not-editing.

use crate::models::TodoItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableTodo {
    pub item: TodoItem,
    /// Text in the edit box
    pub draft: String,
    pub is_editing: bool,
}

impl EditableTodo {
    pub fn new(item: TodoItem) -> Self {
        let draft = item.content.clone();
        Self { item, draft, is_editing: false }
    }

    /// Build the projection for a freshly fetched list.
    pub fn project(todos: &[TodoItem]) -> Vec<EditableTodo> {
        todos.iter().cloned().map(EditableTodo::new).collect()
    }

    /// Open the editor with the server content.
    pub fn begin_edit(rows: &mut [EditableTodo], id: &str) {
        if let Some(row) = find(rows, id) {
            row.draft = row.item.content.clone();
            row.is_editing = true;
        }
    }

    /// Store the edit text. An emptied box falls back to the server content.
    pub fn set_draft(rows: &mut [EditableTodo], id: &str, draft: &str) {
        if let Some(row) = find(rows, id) {
            row.draft = if draft.is_empty() {
                row.item.content.clone()
            } else {
                draft.to_string()
            };
            row.is_editing = true;
        }
    }

    pub fn cancel_edit(rows: &mut [EditableTodo], id: &str) {
        if let Some(row) = find(rows, id) {
            row.is_editing = false;
        }
    }

    pub fn draft_of<'a>(rows: &'a [EditableTodo], id: &str) -> Option<&'a str> {
        rows.iter().find(|row| row.item.id == id).map(|row| row.draft.as_str())
    }

    pub fn is_editing(rows: &[EditableTodo], id: &str) -> bool {
        rows.iter().any(|row| row.item.id == id && row.is_editing)
    }
}

fn find<'a>(rows: &'a mut [EditableTodo], id: &str) -> Option<&'a mut EditableTodo> {
    rows.iter_mut().find(|row| row.item.id == id)
}
