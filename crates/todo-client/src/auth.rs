//! Authentication Flows
//!
//! Sign in, sign up and sign out, with the form checks the pages run
//! before any request is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::http::{ApiClient, ApiFailure};
use crate::models::{Credentials, MessagePayload, NewAccount, SignInPayload};
use crate::session::Expiry;

pub const SIGN_IN_PATH: &str = "/users/sign_in";
pub const SIGN_UP_PATH: &str = "/users/sign_up";
pub const SIGN_OUT_PATH: &str = "/users/sign_out";

const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Field-level form errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("請輸入正確的Email格式")]
    InvalidEmail,
    #[error("密碼長度最少6個字元")]
    PasswordTooShort,
    #[error("密碼長度最少6個字元")]
    ConfirmTooShort,
    #[error("請確認兩次輸入的密碼均為相同")]
    ConfirmMismatch,
    #[error("請輸入暱稱")]
    NicknameRequired,
}

impl ValidationError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "email",
            ValidationError::PasswordTooShort => "password",
            ValidationError::ConfirmTooShort | ValidationError::ConfirmMismatch => "confirm",
            ValidationError::NicknameRequired => "nickname",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{}", first_message(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

fn first_message(errors: &[ValidationError]) -> String {
    errors.first().map(|e| e.to_string()).unwrap_or_default()
}

fn password_len(password: &str) -> usize {
    password.chars().count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ValidationError::InvalidEmail);
        }
        if password_len(&self.password) < MIN_PASSWORD_LEN {
            errors.push(ValidationError::PasswordTooShort);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ValidationError::InvalidEmail);
        }
        if password_len(&self.password) < MIN_PASSWORD_LEN {
            errors.push(ValidationError::PasswordTooShort);
        }
        if password_len(&self.confirm) < MIN_PASSWORD_LEN {
            errors.push(ValidationError::ConfirmTooShort);
        } else if self.confirm != self.password {
            errors.push(ValidationError::ConfirmMismatch);
        }
        if self.nickname.is_empty() {
            errors.push(ValidationError::NicknameRequired);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub nickname: String,
}

/// Sign in and persist token and nickname with the server-reported expiry.
pub async fn sign_in(client: &ApiClient, form: &LoginForm) -> Result<SignedIn, AuthError> {
    form.validate().map_err(AuthError::Invalid)?;

    let body = Credentials {
        email: form.email.trim(),
        password: &form.password,
    };
    let payload: SignInPayload = client.post(SIGN_IN_PATH, &body).await.into_result()?;

    let expiry = Expiry::from_server_exp(payload.exp);
    client
        .session()
        .store_credentials(&payload.token, &payload.nickname, expiry);
    log::info!("[AUTH] signed in as {}", payload.nickname);

    Ok(SignedIn { nickname: payload.nickname })
}

/// Register a new account. Nothing is persisted locally.
pub async fn sign_up(client: &ApiClient, form: &RegisterForm) -> Result<(), AuthError> {
    form.validate().map_err(AuthError::Invalid)?;

    let body = NewAccount {
        email: form.email.trim(),
        password: &form.password,
        nickname: &form.nickname,
    };
    let _: MessagePayload = client.post(SIGN_UP_PATH, &body).await.into_result()?;
    Ok(())
}

/// Sign out and drop every session slot. Returns the server message.
pub async fn sign_out(client: &ApiClient) -> Result<Option<String>, AuthError> {
    let payload: MessagePayload = client.post_empty(SIGN_OUT_PATH).await.into_result()?;
    client.session().clear();
    log::info!("[AUTH] signed out");
    Ok(payload.text())
}
