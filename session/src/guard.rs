//! Route guard for the admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Router hooks call [`RouteGuard::authorize`] right before a protected page
//! renders. The check is a synchronous presence test on the stored token: no
//! network call, no validity or expiry check, no caching between navigations.
//! Backend rejection of a stale token is handled by the admin API client.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::SessionStore;

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/admin/login";

/// Where a successful login lands.
pub const LANDING_ROUTE: &str = "/admin/leads";

const ADMIN_PREFIX: &str = "/admin";

/// Result of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { redirect: &'static str },
}

impl Decision {
    #[must_use]
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Navigation target on denial.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Deny { redirect } => Some(redirect),
        }
    }
}

/// Whether `path` belongs to the protected admin area. The login page itself
/// is public.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    let path = path.find(['?', '#']).map_or(path, |end| &path[..end]);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    if path == LOGIN_ROUTE {
        return false;
    }
    path == ADMIN_PREFIX || path.strip_prefix(ADMIN_PREFIX).is_some_and(|rest| rest.starts_with('/'))
}

/// Presence check over a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct RouteGuard<S> {
    store: S,
}

impl<S: SessionStore> RouteGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decide whether protected content may render.
    pub fn authorize(&self) -> Decision {
        if self.store.has_token() {
            Decision::Allow
        } else {
            tracing::debug!(redirect = LOGIN_ROUTE, "no admin session; denying protected route");
            Decision::Deny { redirect: LOGIN_ROUTE }
        }
    }

    /// Decide for an arbitrary path: public paths are always allowed without
    /// touching the store.
    pub fn check(&self, path: &str) -> Decision {
        if is_protected(path) { self.authorize() } else { Decision::Allow }
    }
}
