//! Todo Client Core
//!
//! Layered architecture:
//! - models: Server-owned entities and response payloads
//! - session: Cookie-like slots holding token, nickname and the checked flag
//! - http: Authorized JSON requests against the remote API
//! - checkout / auth / sync: Flows returning outcomes, never notifications
//!
//! Nothing here touches the DOM, so the crate builds natively for tests
//! and for `wasm32-unknown-unknown` inside the UI.

pub mod config;
pub mod models;
pub mod session;
pub mod http;
pub mod checkout;
pub mod auth;
pub mod sync;
pub mod filter;
pub mod editing;
pub mod route;

pub use config::ClientConfig;
pub use models::{TodoItem, format_create_time};
pub use session::{Expiry, MemoryStorage, Session, SessionStorage};
pub use http::{ApiClient, ApiError, ApiFailure, ApiResponse};
pub use checkout::{checkout, gate, CheckoutOutcome, CheckoutState, GateDecision, Page};
pub use auth::{sign_in, sign_out, sign_up, AuthError, LoginForm, RegisterForm, SignedIn, ValidationError};
pub use sync::{ClearOutcome, SyncError, Synced, TodoSync};
pub use filter::TodoFilter;
pub use editing::EditableTodo;
pub use route::Route;
