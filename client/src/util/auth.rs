//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route uses the same guard condition and every admin page
//! reacts to a failed admin call the same way (redirect on a lost session,
//! inline message otherwise).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use admin_session::{AdminError, Decision};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// `ProtectedRoute` condition for the admin area.
///
/// Re-reads `localStorage` on every call. Builds without browser storage
/// report "pending" instead of denying so nothing redirects prematurely.
pub fn admin_condition() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let guard = admin_session::RouteGuard::new(crate::state::session::LocalStorageStore);
        route_condition(guard.authorize())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Map a guard decision onto the router's condition contract.
pub fn route_condition(decision: Decision) -> Option<bool> {
    Some(decision.is_allow())
}

/// Inline message for an admin call that failed without ending the session.
pub fn admin_failure_message(err: &AdminError) -> String {
    match err {
        AdminError::NotFound => "This item no longer exists.".to_owned(),
        AdminError::Transport(_) => "Could not reach the server. Try again in a moment.".to_owned(),
        AdminError::Status(status) => format!("The server answered with an error ({status})."),
        AdminError::Decode(_) => "The server sent an unexpected response.".to_owned(),
        AdminError::NotAuthenticated | AdminError::SessionExpired => err.to_string(),
    }
}

/// Apply an admin call failure: navigate away when the session is gone,
/// otherwise surface a message.
pub fn handle_admin_error<F>(err: &AdminError, error: RwSignal<Option<String>>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(target) = err.redirect() {
        navigate(target, NavigateOptions::default());
    } else {
        error.set(Some(admin_failure_message(err)));
    }
}
