//! HTTP seam between the session core and a platform HTTP client.

use serde::Serialize;

use crate::wire::RawResponse;

/// Error raised when no HTTP response was received at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, CORS rejection, timeout, etc.
    #[error("request failed: {0}")]
    Network(String),
    /// The request body could not be built.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// No HTTP client exists in this build (e.g. server-side rendering).
    #[error("http transport unavailable in this build")]
    Unavailable,
}

/// Minimal HTTP client surface the login flow and admin client need.
///
/// Implementations report every received response as `Ok`, whatever its
/// status; `Err` is reserved for "no response".
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// `POST url` with a JSON body.
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<RawResponse, TransportError>;

    /// `GET url` with `Authorization: Bearer <token>`.
    async fn get_authorized(&self, url: &str, token: &str) -> Result<RawResponse, TransportError>;
}
