//! Session Checkout Flow
//!
//! Decides on page mount whether the stored session is already validated
//! (`apiChecked`), or must be re-validated against `/users/checkout`.

use crate::http::{ApiClient, ApiFailure};
use crate::models::CheckoutPayload;
use crate::route::Route;

pub const CHECKOUT_PATH: &str = "/users/checkout";

/// Where the session stands after a checkout attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Unchecked,
    Checked,
    Invalid,
}

/// Result of [`checkout`]
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Flag was already set; no request was made
    AlreadyChecked { nickname: Option<String> },
    /// Server confirmed the token; flag is now set
    Validated { nickname: Option<String> },
    /// Server refused or could not be reached; nothing persisted
    Invalid { reason: ApiFailure },
}

impl CheckoutOutcome {
    pub fn state(&self) -> CheckoutState {
        match self {
            CheckoutOutcome::AlreadyChecked { .. } | CheckoutOutcome::Validated { .. } => {
                CheckoutState::Checked
            }
            CheckoutOutcome::Invalid { .. } => CheckoutState::Invalid,
        }
    }
}

/// Run the checkout once for the current page mount.
pub async fn checkout(client: &ApiClient) -> CheckoutOutcome {
    let session = client.session();
    if session.is_checked() {
        log::debug!("[CHECKOUT] flag present, skipping request");
        return CheckoutOutcome::AlreadyChecked { nickname: session.nickname() };
    }

    match client.get::<CheckoutPayload>(CHECKOUT_PATH).await.into_result() {
        Ok(payload) => {
            session.mark_checked();
            CheckoutOutcome::Validated { nickname: payload.nickname }
        }
        Err(reason) => {
            log::info!("[CHECKOUT] session invalid: {}", reason);
            CheckoutOutcome::Invalid { reason }
        }
    }
}

/// Pages that run the checkout gate on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Todo,
}

/// What a page should do with a checkout outcome
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateDecision {
    pub navigate: Option<Route>,
    /// Nickname to greet, set only after a fresh validation
    pub welcome: Option<String>,
    pub load_todos: bool,
}

/// Map a checkout outcome to the page's next step.
pub fn gate(page: Page, outcome: &CheckoutOutcome) -> GateDecision {
    let welcome = match outcome {
        CheckoutOutcome::Validated { nickname } => Some(nickname.clone().unwrap_or_default()),
        _ => None,
    };

    match (page, outcome.state()) {
        (Page::Home, CheckoutState::Checked) | (Page::Login, CheckoutState::Checked) => GateDecision {
            navigate: Some(Route::Todo),
            welcome,
            load_todos: false,
        },
        (Page::Home, _) | (Page::Todo, CheckoutState::Invalid) => GateDecision {
            navigate: Some(Route::Login),
            ..Default::default()
        },
        (Page::Login, _) => GateDecision::default(),
        (Page::Todo, _) => GateDecision {
            navigate: None,
            welcome,
            load_todos: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ApiError;

    fn invalid() -> CheckoutOutcome {
        CheckoutOutcome::Invalid {
            reason: ApiFailure::Transport(ApiError::Transport("offline".into())),
        }
    }

    #[test]
    fn test_home_routes_by_outcome() {
        let ok = gate(Page::Home, &CheckoutOutcome::Validated { nickname: Some("Amy".into()) });
        assert_eq!(ok.navigate, Some(Route::Todo));
        assert_eq!(ok.welcome.as_deref(), Some("Amy"));

        let bad = gate(Page::Home, &invalid());
        assert_eq!(bad.navigate, Some(Route::Login));
        assert!(!bad.load_todos);
    }

    #[test]
    fn test_login_stays_when_invalid() {
        assert_eq!(gate(Page::Login, &invalid()), GateDecision::default());
        let cached = gate(Page::Login, &CheckoutOutcome::AlreadyChecked { nickname: None });
        assert_eq!(cached.navigate, Some(Route::Todo));
        assert!(cached.welcome.is_none());
    }

    #[test]
    fn test_todo_loads_list_when_checked() {
        let cached = gate(Page::Todo, &CheckoutOutcome::AlreadyChecked { nickname: Some("Amy".into()) });
        assert!(cached.load_todos);
        assert!(cached.navigate.is_none());
        assert!(cached.welcome.is_none());

        let fresh = gate(Page::Todo, &CheckoutOutcome::Validated { nickname: Some("Amy".into()) });
        assert!(fresh.load_todos);
        assert_eq!(fresh.welcome.as_deref(), Some("Amy"));

        let bad = gate(Page::Todo, &invalid());
        assert_eq!(bad.navigate, Some(Route::Login));
        assert!(!bad.load_todos);
    }
}
