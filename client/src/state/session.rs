//! Admin session token kept in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the token here, the route guard and admin API client
//! read it, logout removes it. A single `setItem`/`removeItem` call is atomic
//! from the page's point of view, so there is no partial-write state.
//!
//! Outside the browser (native tests, non-`csr` builds) there is no storage:
//! reads see no token and writes fail with `StoreError::Unavailable`.

#[cfg(all(test, not(feature = "csr")))]
#[path = "session_test.rs"]
mod session_test;

use admin_session::{SessionStore, StoreError};
#[cfg(feature = "csr")]
use admin_session::SESSION_KEY;

/// `localStorage`-backed [`SessionStore`] under the `adminToken` key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(SESSION_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if token.is_empty() {
            return Err(StoreError::EmptyToken);
        }
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable("localStorage is disabled"))?;
            storage
                .set_item(SESSION_KEY, token)
                .map_err(|_| StoreError::Unavailable("localStorage rejected the write"))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable("no browser storage in this build"))
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return Ok(());
            };
            storage
                .remove_item(SESSION_KEY)
                .map_err(|_| StoreError::Unavailable("localStorage rejected the removal"))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
