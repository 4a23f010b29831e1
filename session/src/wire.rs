//! HTTP contract with the admin backend.
//!
//! The backend is external; these types mirror exactly what it sends and
//! accepts so both transports (`gloo-net` in the browser, `reqwest` in the
//! CLI) serialize the same bytes.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/admin/login";
pub const LEADS_PATH: &str = "/api/admin/leads";
pub const PRICING_PATH: &str = "/api/admin/pricing";

/// Response header carrying the number of login attempts left before lockout.
pub const ATTEMPTS_REMAINING_HEADER: &str = "X-Attempts-Remaining";

/// Bytes escaped inside one path segment: the URL path set plus `/` and `%`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Detail path for one lead, with `id` escaped as a single segment.
///
/// `None` for ids that cannot stay one segment once a URL parser sees them
/// (empty, `.`, `..`).
#[must_use]
pub fn lead_path(id: &str) -> Option<String> {
    if matches!(id, "" | "." | "..") {
        return None;
    }
    Some(format!("{LEADS_PATH}/{}", utf8_percent_encode(id, SEGMENT)))
}

/// `POST /api/admin/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// `POST /api/admin/login` response body. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Transport-neutral view of an HTTP response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Raw value of [`ATTEMPTS_REMAINING_HEADER`], if the backend sent one.
    pub attempts_remaining: Option<String>,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

/// Parse the attempts-remaining header. Anything that is not a non-negative
/// integer is treated as absent.
#[must_use]
pub fn parse_attempts_remaining(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Backend base URL. An empty base means same-origin relative paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiBase {
    root: String,
}

impl ApiBase {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into().trim().trim_end_matches('/').to_owned();
        Self { root }
    }

    /// Join `path` (which starts with `/`) onto the base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.root)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.root
    }
}
