//! `reqwest` implementation of the session core's HTTP transport.

use admin_session::wire::ATTEMPTS_REMAINING_HEADER;
use admin_session::{HttpTransport, RawResponse, TransportError};
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a fresh client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("site-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

async fn into_raw(resp: reqwest::Response) -> Result<RawResponse, TransportError> {
    let status = resp.status().as_u16();
    let attempts_remaining = resp
        .headers()
        .get(ATTEMPTS_REMAINING_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(RawResponse { status, attempts_remaining, body })
}

impl HttpTransport for ReqwestTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        into_raw(resp).await
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        into_raw(resp).await
    }
}
