//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_client::{gate, ApiClient, CheckoutOutcome, GateDecision, Page, Route, TodoSync};

use crate::notice::{welcome, Toasts};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// API client carrying the cookie-backed session
    client: StoredValue<ApiClient, LocalStorage>,
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), client: ApiClient, toasts: Toasts) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            client: StoredValue::new_local(client),
            toasts,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn sync(&self) -> TodoSync {
        TodoSync::new(self.client())
    }

    /// Switch page and mirror it into `location.hash`
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        if let Err(e) = window().location().set_hash(route.path()) {
            log::warn!("[ROUTE] could not update hash: {:?}", e);
        }
    }

    /// Follow a checkout outcome for `page`: greet, then navigate.
    pub fn apply_gate(&self, page: Page, outcome: &CheckoutOutcome) -> GateDecision {
        let decision = gate(page, outcome);
        if let Some(nickname) = &decision.welcome {
            self.toasts.success(welcome(nickname));
        }
        if let Some(route) = decision.navigate {
            self.navigate(route);
        }
        decision
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
