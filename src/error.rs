//! CLI error type.

use admin_session::{AdminError, StoreError, SubmitError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no config directory found; pass --session-file or set SITE_ADMIN_SESSION_FILE")]
    NoSessionPath,
    #[error("login rejected: {message}{}", attempts_suffix(.attempts_remaining))]
    LoginRejected { message: String, attempts_remaining: Option<u32> },
    #[error("{0}")]
    Unreachable(String),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error("session storage failed: {0}")]
    Store(#[from] StoreError),
    #[error("failed to read password: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[allow(clippy::ref_option)]
fn attempts_suffix(remaining: &Option<u32>) -> String {
    match *remaining {
        Some(n) => format!(" ({n} attempts remaining)"),
        None => String::new(),
    }
}
