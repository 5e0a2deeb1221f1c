//! UI Components
//!
//! Reusable Leptos components.

mod toaster;
mod form_field;
mod nav_bar;
mod new_todo_form;
mod filter_tabs;
mod todo_list;
mod todo_row;

pub use toaster::Toaster;
pub use form_field::{field_error, FormField};
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use filter_tabs::FilterTabs;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
