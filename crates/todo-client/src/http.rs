//! HTTP Client
//!
//! Authorized JSON requests against the remote API, normalized into
//! [`ApiResponse`]. Every call carries the stored token; a 401 drops the
//! checked flag.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::models::message_text;
use crate::session::Session;

/// Transport-level failures (no usable response)
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Outcome of one API call
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// `status` was truthy and the payload decoded
    Success(T),
    /// `status` was falsy or missing
    Failure { message: String, status_code: u16 },
    /// Network failure or unparseable body
    TransportError(ApiError),
}

/// Non-success half of an [`ApiResponse`]
#[derive(Debug, thiserror::Error)]
pub enum ApiFailure {
    #[error("{}", rejected_text(.message, .status_code))]
    Rejected { message: String, status_code: u16 },
    #[error(transparent)]
    Transport(#[from] ApiError),
}

fn rejected_text(message: &str, status_code: &u16) -> String {
    if message.is_empty() {
        format!("request rejected ({})", status_code)
    } else {
        message.to_string()
    }
}

impl ApiFailure {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiFailure::Rejected { status_code, .. } => Some(*status_code),
            ApiFailure::Transport(_) => None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure { message, status_code } => {
                Err(ApiFailure::Rejected { message, status_code })
            }
            ApiResponse::TransportError(err) => Err(ApiFailure::Transport(err)),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Classify a decoded body by its `status` field.
    pub fn from_json(status_code: u16, body: Value) -> Self {
        let ok = body.get("status").map(is_truthy).unwrap_or(false);
        if !ok {
            let message = body.get("message").and_then(message_text).unwrap_or_default();
            return ApiResponse::Failure { message, status_code };
        }
        match serde_json::from_value(body) {
            Ok(payload) => ApiResponse::Success(payload),
            Err(e) => ApiResponse::TransportError(ApiError::Decode(e.to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Client for the remote todolist API
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
    http: Client,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            config,
            http: Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResponse<T> {
        match encode(body) {
            Ok(body) => self.request(Method::POST, path, Some(body)).await,
            Err(err) => ApiResponse::TransportError(err),
        }
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::POST, path, None).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResponse<T> {
        match encode(body) {
            Ok(body) => self.request(Method::PUT, path, Some(body)).await,
            Err(err) => ApiResponse::TransportError(err),
        }
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::PATCH, path, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send one request and normalize whatever comes back.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResponse<T> {
        let url = format!("{}{}", self.config.base_url, path);
        log::debug!("[HTTP] {} {}", method, path);

        match self.send(method.clone(), &url, body).await {
            Ok((status_code, json)) => ApiResponse::from_json(status_code, json),
            Err(err) => {
                log::error!("[HTTP] {} {} failed: {}", method, path, err);
                ApiResponse::TransportError(err)
            }
        }
    }

    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<(u16, Value), ApiError> {
        let token = self.session.token().unwrap_or_default();
        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, token);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status_code = resp.status().as_u16();
        if status_code == 401 {
            log::warn!("[HTTP] 401 from {}, dropping checked flag", url);
            self.session.clear_checked();
        }

        let text = resp.text().await?;
        let json = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((status_code, json))
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}
