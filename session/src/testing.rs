//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Notify;

use crate::transport::{HttpTransport, TransportError};
use crate::wire::RawResponse;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Post { url: String, body: serde_json::Value },
    Get { url: String, token: String },
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    pub(crate) calls: RefCell<Vec<Call>>,
    /// When set, each request waits for a notification before answering.
    pub(crate) gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(RawResponse { status, attempts_remaining: None, body: body.to_string() })
    }

    pub(crate) fn respond_raw(self, resp: RawResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(resp));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(TransportError::Network(message.to_owned())));
        self
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    async fn answer(&self) -> Result<RawResponse, TransportError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

impl HttpTransport for FakeTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<RawResponse, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.calls.borrow_mut().push(Call::Post { url: url.to_owned(), body });
        self.answer().await
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<RawResponse, TransportError> {
        self.calls.borrow_mut().push(Call::Get { url: url.to_owned(), token: token.to_owned() });
        self.answer().await
    }
}
