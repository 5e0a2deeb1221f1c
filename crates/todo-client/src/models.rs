//! Models
//!
//! Data structures matching the remote API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// To-do item (owned by the server)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    pub content: String,
    pub status: bool,
}

impl TodoItem {
    /// Creation date for display
    pub fn created_on(&self) -> Option<String> {
        format_create_time(self.create_time)
    }
}

/// Format a server timestamp as a calendar date (UTC).
///
/// Timestamps with at most 10 digits are seconds, longer ones milliseconds.
pub fn format_create_time(timestamp: i64) -> Option<String> {
    let millis = if timestamp.unsigned_abs().to_string().len() <= 10 {
        timestamp.checked_mul(1000)?
    } else {
        timestamp
    };
    let time = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(time.format("%Y/%-m/%-d").to_string())
}

// ========================
// Response Payloads
// ========================

/// `POST /users/sign_in`
#[derive(Debug, Clone, Deserialize)]
pub struct SignInPayload {
    pub token: String,
    pub nickname: String,
    pub exp: i64,
}

/// `GET /users/checkout`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutPayload {
    #[serde(default)]
    pub nickname: Option<String>,
}

/// `GET /todos/`
#[derive(Debug, Clone, Deserialize)]
pub struct TodoListPayload {
    pub data: Vec<TodoItem>,
}

/// Any response carrying only `status` and an optional `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<Value>,
}

impl MessagePayload {
    pub fn text(&self) -> Option<String> {
        self.message.as_ref().and_then(message_text)
    }
}

/// Server messages are either a string or a list of strings.
pub fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => {
            let parts: Vec<String> = parts
                .iter()
                .filter_map(|p| match p {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            Some(parts.join(", "))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct ContentBody<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub nickname: &'a str,
}
