//! Admin login flow.
//!
//! STATE MACHINE
//! =============
//! `Anonymous --submit--> Authenticating`
//! `Authenticating --success--> Authenticated` (token persisted)
//! `Authenticating --failure--> Anonymous` (message surfaced, token untouched)
//! `Authenticated --logout--> Anonymous` (token cleared)
//!
//! Lockout and rate limiting live entirely in the backend; this flow only
//! reports the backend's message and attempts-remaining count. Nothing is
//! retried automatically.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::guard::{LANDING_ROUTE, LOGIN_ROUTE};
use crate::store::{SessionStore, StoreError};
use crate::transport::HttpTransport;
use crate::wire::{ApiBase, LOGIN_PATH, LoginRequest, LoginResponse, RawResponse, parse_attempts_remaining};

/// Shown when the backend rejects a login without a `detail` message.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Login failed. Check the password and try again.";

/// Shown when the login request got no response at all.
pub const CONNECTIVITY_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";

/// Shown when the backend accepted the login but the token could not be kept.
pub const STORAGE_FAILURE_MESSAGE: &str = "Signed in, but the session could not be saved on this device.";

/// Result of one login submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token persisted.
    Authenticated,
    /// The backend answered and refused (wrong password, rate-limited, ...).
    Rejected { message: String, attempts_remaining: Option<u32> },
    /// No response was received.
    Unreachable { message: String },
}

impl LoginOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Authenticated => None,
            Self::Rejected { message, .. } | Self::Unreachable { message } => Some(message),
        }
    }

    /// Attempts left before lockout, when the backend reported it.
    #[must_use]
    pub fn attempts_remaining(&self) -> Option<u32> {
        match self {
            Self::Rejected { attempts_remaining, .. } => *attempts_remaining,
            _ => None,
        }
    }

    /// Where to navigate after this outcome; `None` means stay on the form.
    #[must_use]
    pub fn redirect(&self) -> Option<&'static str> {
        self.is_success().then_some(LANDING_ROUTE)
    }
}

/// A submission that was refused before any request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("password is required")]
    EmptyPassword,
    #[error("a login request is already in flight")]
    InFlight,
}

/// Client-side view of the login state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Clears the in-flight flag when a submission finishes or its future is
/// dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Login flow bound to a transport and a session store.
///
/// Clones share the in-flight flag, so a UI can hand a clone to a spawned
/// task while the form keeps checking [`LoginFlow::is_busy`].
#[derive(Clone, Debug)]
pub struct LoginFlow<T, S> {
    transport: T,
    store: S,
    api: ApiBase,
    in_flight: Arc<AtomicBool>,
}

impl<T: HttpTransport, S: SessionStore> LoginFlow<T, S> {
    pub fn new(transport: T, store: S, api: ApiBase) -> Self {
        Self { transport, store, api, in_flight: Arc::new(AtomicBool::new(false)) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a submission is awaiting the backend.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> AuthPhase {
        if self.is_busy() {
            AuthPhase::Authenticating
        } else if self.store.has_token() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Send `password` to the backend and persist the issued token on success.
    ///
    /// Exactly one request is sent per accepted submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] without sending anything if the password is
    /// empty or another submission from this flow is still in flight.
    pub async fn submit(&self, password: &str) -> Result<LoginOutcome, SubmitError> {
        if password.is_empty() {
            return Err(SubmitError::EmptyPassword);
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::InFlight);
        }
        let _in_flight = InFlight(&self.in_flight);

        tracing::info!("admin login attempt");
        let url = self.api.url(LOGIN_PATH);
        let request = LoginRequest { password: password.to_owned() };
        let outcome = match self.transport.post_json(&url, &request).await {
            Ok(resp) => self.settle(resp),
            Err(e) => {
                tracing::warn!(error = %e, "admin login request failed");
                LoginOutcome::Unreachable { message: CONNECTIVITY_MESSAGE.to_owned() }
            }
        };
        Ok(outcome)
    }

    /// Clear the session. Returns the route to navigate to.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store could not remove the token.
    pub fn logout(&self) -> Result<&'static str, StoreError> {
        self.store.clear()?;
        tracing::info!("admin logged out");
        Ok(LOGIN_ROUTE)
    }

    fn settle(&self, resp: RawResponse) -> LoginOutcome {
        match interpret(&resp) {
            Ok(token) => match self.store.set(&token) {
                Ok(()) => {
                    tracing::info!("admin login succeeded");
                    LoginOutcome::Authenticated
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to persist admin session token");
                    LoginOutcome::Rejected {
                        message: STORAGE_FAILURE_MESSAGE.to_owned(),
                        attempts_remaining: None,
                    }
                }
            },
            Err(rejected) => {
                tracing::warn!(
                    status = resp.status,
                    attempts_remaining = ?rejected.attempts_remaining(),
                    "admin login rejected"
                );
                rejected
            }
        }
    }
}

/// Map a backend response to the issued token, or to a rejection outcome.
fn interpret(resp: &RawResponse) -> Result<String, LoginOutcome> {
    let body: LoginResponse = match serde_json::from_str(&resp.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = resp.status, error = %e, "login response body is not JSON; treating fields as absent");
            LoginResponse::default()
        }
    };
    if resp.is_success() && body.success {
        if let Some(token) = body.token.filter(|t| !t.is_empty()) {
            return Ok(token);
        }
        tracing::warn!("login response reported success without a token");
    }
    let attempts_remaining = resp.attempts_remaining.as_deref().and_then(parse_attempts_remaining);
    let message = body
        .detail
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned());
    Err(LoginOutcome::Rejected { message, attempts_remaining })
}
