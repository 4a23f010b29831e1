//! Authenticated admin API calls (leads, pricing).
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages render as soon as a token is present; the first admin call
//! they make is where a stale or revoked token is discovered. A 401/403 here
//! is a forced logout: the token that was sent is cleared and the caller is
//! told to send the visitor back to the login page.
//!
//! The backend owns lead storage and pricing data. These types only read the
//! fields the admin pages display and default anything missing.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::guard::LOGIN_ROUTE;
use crate::store::SessionStore;
use crate::transport::{HttpTransport, TransportError};
use crate::wire::{ApiBase, LEADS_PATH, PRICING_PATH, lead_path};

/// A contact-form submission as listed in the admin area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// One line of the price list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingItem {
    pub service: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

/// Lead ids come back as strings or integers depending on the backend store.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// No token stored; nothing was sent.
    #[error("not logged in")]
    NotAuthenticated,
    /// The backend refused the token; it has been cleared.
    #[error("session expired, please log in again")]
    SessionExpired,
    #[error("not found")]
    NotFound,
    #[error("admin request failed with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl AdminError {
    /// Route to navigate to when this error ends the admin session.
    #[must_use]
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::NotAuthenticated | Self::SessionExpired => Some(LOGIN_ROUTE),
            _ => None,
        }
    }
}

/// Admin API client reading its bearer token from a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct AdminClient<T, S> {
    transport: T,
    store: S,
    api: ApiBase,
}

impl<T: HttpTransport, S: SessionStore> AdminClient<T, S> {
    pub fn new(transport: T, store: S, api: ApiBase) -> Self {
        Self { transport, store, api }
    }

    /// `GET /api/admin/leads`
    ///
    /// # Errors
    ///
    /// See [`AdminError`]; a rejected token is cleared before returning.
    pub async fn leads(&self) -> Result<Vec<Lead>, AdminError> {
        self.get_json(LEADS_PATH).await
    }

    /// `GET /api/admin/leads/{id}`, with `id` escaped as one path segment.
    ///
    /// # Errors
    ///
    /// See [`AdminError`]; a rejected token is cleared before returning.
    /// `.`, `..` and empty ids are [`AdminError::NotFound`] without a request.
    pub async fn lead(&self, id: &str) -> Result<Lead, AdminError> {
        let path = lead_path(id).ok_or(AdminError::NotFound)?;
        self.get_json(&path).await
    }

    /// `GET /api/admin/pricing`
    ///
    /// # Errors
    ///
    /// See [`AdminError`]; a rejected token is cleared before returning.
    pub async fn pricing(&self) -> Result<Vec<PricingItem>, AdminError> {
        self.get_json(PRICING_PATH).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AdminError> {
        let token = self.store.get().ok_or(AdminError::NotAuthenticated)?;
        let resp = self.transport.get_authorized(&self.api.url(path), &token).await?;

        if resp.is_unauthorized() {
            self.force_logout(&token);
            return Err(AdminError::SessionExpired);
        }
        if resp.status == 404 {
            return Err(AdminError::NotFound);
        }
        if !resp.is_success() {
            tracing::warn!(path, status = resp.status, "admin request failed");
            return Err(AdminError::Status(resp.status));
        }
        Ok(serde_json::from_str(&resp.body)?)
    }

    /// Clear `rejected` unless a newer login already replaced it.
    fn force_logout(&self, rejected: &str) {
        if self.store.get().as_deref() != Some(rejected) {
            return;
        }
        match self.store.clear() {
            Ok(()) => tracing::warn!("admin token rejected by backend; session cleared"),
            Err(e) => tracing::error!(error = %e, "admin token rejected but could not be cleared"),
        }
    }
}
