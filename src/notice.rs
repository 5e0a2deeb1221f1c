//! Notices
//!
//! Translates flow outcomes into toasts. Flows never notify on their own.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_client::{ClearOutcome, SyncError, Synced};

/// How long a toast stays on screen
const TOAST_MS: u32 = 3_000;

pub const CREATED: &str = "成功新增待辦事項";
pub const REGISTERED: &str = "成功註冊帳號";
pub const CLEARED: &str = "已清除所有已完成項目";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

pub fn welcome(nickname: &str) -> String {
    format!("Hi ~ {} 歡迎回來", nickname)
}

/// Notices for a create/update/toggle/delete result.
pub fn mutation_notices(result: &Result<Synced, SyncError>, fallback: &str) -> Vec<(NoticeKind, String)> {
    match result {
        Ok(synced) => {
            let text = synced.message.clone().unwrap_or_else(|| fallback.to_string());
            let mut notices = vec![(NoticeKind::Success, text)];
            if let Err(e) = &synced.todos {
                notices.push((NoticeKind::Error, e.to_string()));
            }
            notices
        }
        Err(e) => vec![(NoticeKind::Error, e.to_string())],
    }
}

/// Notices for clear-finished. A partial failure shows nothing.
pub fn clear_notices(outcome: &ClearOutcome) -> Vec<(NoticeKind, String)> {
    match outcome {
        ClearOutcome::Cleared { todos, .. } => {
            let mut notices = vec![(NoticeKind::Success, CLEARED.to_string())];
            if let Err(e) = todos {
                notices.push((NoticeKind::Error, e.to_string()));
            }
            notices
        }
        ClearOutcome::Partial { .. } | ClearOutcome::Nothing => Vec::new(),
    }
}

/// Toast queue provided through [`crate::context::AppContext`]
#[derive(Clone, Copy)]
pub struct Toasts {
    pub items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn show_all(&self, notices: Vec<(NoticeKind, String)>) {
        for (kind, text) in notices {
            self.push(kind, text);
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|items| items.push(Notice { id, kind, text }));

        let toasts = *self;
        Timeout::new(TOAST_MS, move || toasts.dismiss(id)).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_client::{ApiFailure, TodoItem};

    fn rejected(message: &str) -> SyncError {
        SyncError::Api(ApiFailure::Rejected { message: message.into(), status_code: 400 })
    }

    #[test]
    fn test_mutation_success_prefers_server_message() {
        let result = Ok(Synced { message: Some("更新成功".into()), todos: Ok(Vec::<TodoItem>::new()) });
        assert_eq!(mutation_notices(&result, CREATED), vec![(NoticeKind::Success, "更新成功".into())]);

        let silent = Ok(Synced { message: None, todos: Err(rejected("取得失敗")) });
        assert_eq!(
            mutation_notices(&silent, CREATED),
            vec![(NoticeKind::Success, CREATED.into()), (NoticeKind::Error, "取得失敗".into())]
        );
    }

    #[test]
    fn test_mutation_failure_and_empty_content() {
        assert_eq!(mutation_notices(&Err(rejected("失敗")), CREATED), vec![(NoticeKind::Error, "失敗".into())]);
        assert_eq!(
            mutation_notices(&Err(SyncError::EmptyContent), CREATED),
            vec![(NoticeKind::Error, "請確認輸入內容".into())]
        );
    }

    #[test]
    fn test_partial_clear_is_silent() {
        assert!(clear_notices(&ClearOutcome::Partial { succeeded: 1, attempted: 2 }).is_empty());
        let cleared = ClearOutcome::Cleared { deleted: 2, todos: Ok(Vec::new()) };
        assert_eq!(clear_notices(&cleared), vec![(NoticeKind::Success, CLEARED.into())]);
    }

    #[test]
    fn test_welcome_text() {
        assert_eq!(welcome("Amy"), "Hi ~ Amy 歡迎回來");
    }
}
