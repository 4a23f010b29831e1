//! Persisted session token storage.
//!
//! DESIGN
//! ======
//! The token is the only shared mutable value in the admin area. It is written
//! by a successful login, cleared by logout, and read by the route guard and
//! by authenticated API calls. Every reader and writer goes through
//! [`SessionStore`] so tests can substitute an in-memory store and each
//! platform can keep the value where it belongs (browser `localStorage`, a
//! file for the CLI).
//!
//! Stores take `&self` for writes: a store handle is shared between the login
//! flow, the guard and the admin client, and implementations keep their own
//! interior mutability.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Fixed key the token is stored under.
pub const SESSION_KEY: &str = "adminToken";

/// Error returned when a store cannot persist or clear the token.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Empty tokens are never persisted; an empty value reads as "absent".
    #[error("refusing to store an empty session token")]
    EmptyToken,
    /// The backing storage does not exist on this platform or in this context.
    #[error("session storage unavailable: {0}")]
    Unavailable(&'static str),
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read/write access to the persisted session token.
pub trait SessionStore {
    /// Current token, or `None` when absent or empty.
    fn get(&self) -> Option<String>;

    /// Replace the stored token. Either the old token remains or the new one
    /// fully replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the token is empty or the backing storage
    /// rejects the write.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Clearing an already-empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;

    /// Whether a non-empty token is present.
    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if token.is_empty() {
            return Err(StoreError::EmptyToken);
        }
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "adminToken", default, skip_serializing_if = "Option::is_none")]
    admin_token: Option<String>,
}

/// JSON file holding `{ "adminToken": "<token>" }`.
///
/// Writes go to a sibling temp file that is then renamed over the target, so a
/// concurrent reader sees either the previous token or the new one.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file unique to this process and call, so concurrent
    /// writers never share one.
    fn temp_path(&self) -> PathBuf {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_else(|| "session".into());
        name.push(format!(".{}.{}.tmp", std::process::id(), NEXT.fetch_add(1, Ordering::Relaxed)));
        self.path.with_file_name(name)
    }

    fn read_file(&self) -> Result<SessionFile, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match self.read_file() {
            Ok(file) => file.admin_token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file; treating as logged out");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if token.is_empty() {
            return Err(StoreError::EmptyToken);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&SessionFile { admin_token: Some(token.to_owned()) })?;
        let temp = self.temp_path();
        if let Err(e) = write_private(&temp, &body).and_then(|()| std::fs::rename(&temp, &self.path)) {
            if let Err(cleanup) = std::fs::remove_file(&temp) {
                tracing::debug!(error = %cleanup, "failed to remove temp session file");
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Create `path` readable by the owner only and write `body` to it.
fn write_private(path: &Path, body: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);
    let mut file = options.open(path)?;
    file.write_all(body.as_bytes())?;
    file.sync_all()
}
