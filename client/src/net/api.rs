//! REST plumbing between the admin pages and the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports `TransportError::Unavailable`, which
//! the login flow turns into its connectivity message.
//!
//! ERROR HANDLING
//! ==============
//! Every received response is handed back as a `RawResponse` whatever its
//! status; interpretation (rejection, forced logout) happens in
//! `admin-session` so the browser and the CLI behave the same.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use admin_session::wire::ATTEMPTS_REMAINING_HEADER;
use admin_session::{AdminClient, ApiBase, HttpTransport, LoginFlow, RawResponse, TransportError};
use serde::Serialize;

use crate::state::session::LocalStorageStore;

/// Backend base URL baked in at build time; empty means same origin.
const API_BASE_URL: Option<&str> = option_env!("SITE_API_BASE_URL");

pub type SiteLoginFlow = LoginFlow<GlooTransport, LocalStorageStore>;
pub type SiteAdminClient = AdminClient<GlooTransport, LocalStorageStore>;

#[must_use]
pub fn api_base() -> ApiBase {
    ApiBase::new(API_BASE_URL.unwrap_or_default())
}

/// Login flow for one form instance; clones share its in-flight flag.
#[must_use]
pub fn login_flow() -> SiteLoginFlow {
    LoginFlow::new(GlooTransport, LocalStorageStore, api_base())
}

#[must_use]
pub fn admin_client() -> SiteAdminClient {
    AdminClient::new(GlooTransport, LocalStorageStore, api_base())
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `fetch`-based transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
async fn into_raw(resp: gloo_net::http::Response) -> RawResponse {
    let status = resp.status();
    let attempts_remaining = resp.headers().get(ATTEMPTS_REMAINING_HEADER);
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("failed to read response body: {e}");
            String::new()
        }
    };
    RawResponse { status, attempts_remaining, body }
}

impl HttpTransport for GlooTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(into_raw(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(into_raw(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token);
            Err(TransportError::Unavailable)
        }
    }
}
