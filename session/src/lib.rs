//! Admin session core shared by the website frontend and the admin CLI.
//!
//! This crate owns everything about the admin area that is not presentation:
//! the persisted session token, the login request/response contract, the
//! login flow state machine, the route guard, and the authenticated admin API
//! calls. It does no I/O of its own beyond the optional file-backed store;
//! HTTP goes through an [`HttpTransport`] supplied by the caller so the
//! browser build can use `gloo-net` and the CLI can use `reqwest`.

pub mod admin;
pub mod guard;
pub mod login;
pub mod store;
pub mod transport;
pub mod wire;

#[cfg(test)]
mod testing;

pub use admin::{AdminClient, AdminError, Lead, PricingItem};
pub use guard::{Decision, LANDING_ROUTE, LOGIN_ROUTE, RouteGuard, is_protected};
pub use login::{AuthPhase, LoginFlow, LoginOutcome, SubmitError};
pub use store::{FileSessionStore, MemorySessionStore, SESSION_KEY, SessionStore, StoreError};
pub use transport::{HttpTransport, TransportError};
pub use wire::{ApiBase, LoginRequest, LoginResponse, RawResponse};
