//! To-Do Synchronization
//!
//! One request per mutation, followed on success by exactly one full
//! re-fetch. Failed mutations never re-fetch.

use futures::future::join_all;

use crate::filter::TodoFilter;
use crate::http::{ApiClient, ApiFailure};
use crate::models::{ContentBody, MessagePayload, TodoItem, TodoListPayload};

pub const TODOS_PATH: &str = "/todos/";

fn item_path(id: &str) -> String {
    format!("/todos/{}", id)
}

fn toggle_path(id: &str) -> String {
    format!("/todos/{}/toggle", id)
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Rejected before any request was made
    #[error("請確認輸入內容")]
    EmptyContent,
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

/// A successful mutation and the list fetched right after it
#[derive(Debug)]
pub struct Synced {
    /// Server message for the mutation, if it sent one
    pub message: Option<String>,
    pub todos: Result<Vec<TodoItem>, SyncError>,
}

/// Result of [`TodoSync::clear_finished`]
#[derive(Debug)]
pub enum ClearOutcome {
    /// No completed item was visible; nothing was sent
    Nothing,
    /// Every delete succeeded and the list was re-fetched
    Cleared {
        deleted: usize,
        todos: Result<Vec<TodoItem>, SyncError>,
    },
    /// Some deletes failed; the list was NOT re-fetched
    Partial { succeeded: usize, attempted: usize },
}

/// To-do operations for the current session
#[derive(Clone, Debug)]
pub struct TodoSync {
    client: ApiClient,
}

impl TodoSync {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full list for the session.
    pub async fn list(&self) -> Result<Vec<TodoItem>, SyncError> {
        let payload: TodoListPayload = self.client.get(TODOS_PATH).await.into_result()?;
        log::debug!("[SYNC] loaded {} todos", payload.data.len());
        Ok(payload.data)
    }

    /// Create a todo from trimmed, non-empty content.
    pub async fn create(&self, content: &str) -> Result<Synced, SyncError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SyncError::EmptyContent);
        }
        let payload: MessagePayload = self
            .client
            .post(TODOS_PATH, &ContentBody { content })
            .await
            .into_result()?;
        Ok(self.refetch(payload.text()).await)
    }

    pub async fn update(&self, id: &str, content: &str) -> Result<Synced, SyncError> {
        let payload: MessagePayload = self
            .client
            .put(&item_path(id), &ContentBody { content })
            .await
            .into_result()?;
        Ok(self.refetch(payload.text()).await)
    }

    /// Flip the server-side status.
    pub async fn toggle(&self, id: &str) -> Result<Synced, SyncError> {
        let payload: MessagePayload = self.client.patch(&toggle_path(id)).await.into_result()?;
        Ok(self.refetch(payload.text()).await)
    }

    pub async fn delete(&self, id: &str) -> Result<Synced, SyncError> {
        let payload: MessagePayload = self.client.delete(&item_path(id)).await.into_result()?;
        Ok(self.refetch(payload.text()).await)
    }

    /// Delete every completed item visible under `filter`, concurrently.
    pub async fn clear_finished(&self, todos: &[TodoItem], filter: TodoFilter) -> ClearOutcome {
        let targets: Vec<&TodoItem> = filter
            .apply(todos)
            .into_iter()
            .filter(|item| item.status)
            .collect();
        if targets.is_empty() {
            return ClearOutcome::Nothing;
        }

        let paths: Vec<String> = targets.iter().map(|item| item.id.as_str()).map(item_path).collect();
        let results = join_all(
            paths
                .iter()
                .map(|path| self.client.delete::<MessagePayload>(path)),
        )
        .await;

        let attempted = results.len();
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        if succeeded < attempted {
            log::warn!("[SYNC] clear finished: {}/{} deletes succeeded, list not reloaded", succeeded, attempted);
            return ClearOutcome::Partial { succeeded, attempted };
        }

        ClearOutcome::Cleared {
            deleted: attempted,
            todos: self.list().await,
        }
    }

    async fn refetch(&self, message: Option<String>) -> Synced {
        Synced {
            message,
            todos: self.list().await,
        }
    }
}
