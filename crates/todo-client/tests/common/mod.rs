//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use todo_client::{ApiClient, ClientConfig, MemoryStorage, Session, TodoItem};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Client pointed at the mock server, plus a handle on its storage
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let session = Session::new(storage.clone());
    (ApiClient::new(ClientConfig::new(server.uri()), session), storage)
}

pub fn todo(id: &str, content: &str, status: bool) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        create_time: 1_700_000_000,
        content: content.to_string(),
        status,
    }
}

pub fn list_body(todos: &[TodoItem]) -> Value {
    json!({ "status": true, "data": todos })
}

pub fn ok_message(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": true, "message": message }))
}

pub fn rejected(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({ "status": false, "message": message }))
}

/// Minimal stateful stand-in for the list and toggle endpoints
#[derive(Clone, Default)]
pub struct FakeTodos {
    items: Arc<Mutex<Vec<TodoItem>>>,
}

impl FakeTodos {
    pub fn with(items: Vec<TodoItem>) -> Self {
        Self { items: Arc::new(Mutex::new(items)) }
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/todos/"))
            .respond_with(ListResponder(self.clone()))
            .mount(server)
            .await;
        Mock::given(method("PATCH"))
            .and(path_regex(r"^/todos/[^/]+/toggle$"))
            .respond_with(ToggleResponder(self.clone()))
            .mount(server)
            .await;
    }
}

struct ListResponder(FakeTodos);

impl Respond for ListResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let items = self.0.items.lock().unwrap();
        ResponseTemplate::new(200).set_body_json(list_body(&items))
    }
}

struct ToggleResponder(FakeTodos);

impl Respond for ToggleResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request
            .url
            .path_segments()
            .and_then(|mut segments| segments.nth(1))
            .unwrap_or_default()
            .to_string();
        let mut items = self.0.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.status = !item.status;
                ok_message("狀態切換成功")
            }
            None => rejected(404, "查無此代辦"),
        }
    }
}
