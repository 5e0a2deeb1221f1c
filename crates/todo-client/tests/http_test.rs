mod common;

use common::client_for;
use serde_json::json;
use todo_client::models::{MessagePayload, TodoListPayload};
use todo_client::session::{CHECKED_SLOT, NICKNAME_SLOT, TOKEN_SLOT};
use todo_client::{ApiClient, ApiError, ApiResponse, ClientConfig, Expiry, Session, SessionStorage};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_sent_as_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/"))
        .and(header("authorization", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, storage) = client_for(&server);
    storage.set(TOKEN_SLOT, "tok-123", Expiry::Days(1.0));

    let resp: ApiResponse<TodoListPayload> = client.get("/todos/").await;
    match resp {
        ApiResponse::Success(payload) => assert!(payload.data.is_empty()),
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_token_sends_empty_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/checkout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"status": false, "message": "未授權"})))
        .mount(&server)
        .await;

    let (client, _storage) = client_for(&server);
    let _: ApiResponse<MessagePayload> = client.get("/users/checkout").await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let auth = requests[0].headers.get("authorization").map(|v| v.to_str().unwrap().to_string());
    assert_eq!(auth.as_deref(), Some(""));
}

#[tokio::test]
async fn test_401_clears_only_checked_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"status": false, "message": "驗證錯誤"})))
        .mount(&server)
        .await;

    let (client, storage) = client_for(&server);
    storage.set(TOKEN_SLOT, "tok", Expiry::Days(1.0));
    storage.set(NICKNAME_SLOT, "Amy", Expiry::Days(1.0));
    storage.set(CHECKED_SLOT, "true", Expiry::Days(3.0));

    let resp: ApiResponse<TodoListPayload> = client.get("/todos/").await;
    match resp {
        ApiResponse::Failure { message, status_code } => {
            assert_eq!(message, "驗證錯誤");
            assert_eq!(status_code, 401);
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(storage.get(CHECKED_SLOT), None);
    assert_eq!(storage.get(TOKEN_SLOT).as_deref(), Some("tok"));
    assert_eq!(storage.get(NICKNAME_SLOT).as_deref(), Some("Amy"));
}

#[tokio::test]
async fn test_body_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos/"))
        .and(body_json(json!({"content": "buy milk"})))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": true, "newTodoId": "x1"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _storage) = client_for(&server);
    let resp: ApiResponse<MessagePayload> = client.post("/todos/", &json!({"content": "buy milk"})).await;
    assert!(resp.is_success());
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let (client, _storage) = client_for(&server);
    let resp: ApiResponse<TodoListPayload> = client.get("/todos/").await;
    assert!(matches!(resp, ApiResponse::TransportError(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1"), Session::in_memory());
    let resp: ApiResponse<TodoListPayload> = client.get("/todos/").await;
    assert!(matches!(resp, ApiResponse::TransportError(ApiError::Transport(_))));
}
