//! Tab Filters
//!
//! View-only subsets of the cached list; switching tabs never re-fetches.

use crate::models::TodoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Finished,
    Unfinished,
}

impl TodoFilter {
    pub const TABS: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Finished, TodoFilter::Unfinished];

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "全部項目",
            TodoFilter::Finished => "已完成項目",
            TodoFilter::Unfinished => "未完成項目",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Finished => item.status,
            TodoFilter::Unfinished => !item.status,
        }
    }

    pub fn apply<'a>(&self, todos: &'a [TodoItem]) -> Vec<&'a TodoItem> {
        todos.iter().filter(|item| self.matches(item)).collect()
    }

    /// Footer text, e.g. "3 個 待完成項目"
    pub fn summary(&self, visible: usize) -> String {
        let noun = if *self == TodoFilter::Finished { "已完成項目" } else { "待完成項目" };
        format!("{} 個 {}", visible, noun)
    }

    /// Clear-finished is hidden on the unfinished tab
    pub fn allows_clear(&self) -> bool {
        *self != TodoFilter::Unfinished
    }
}
