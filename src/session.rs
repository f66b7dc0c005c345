//! Session State and Persistence
//!
//! Holds the signed-in user for the lifetime of the process. `Session` is
//! plain data passed by reference to whoever needs it; the only persistence
//! side effects are the explicit `SessionStore::load` / `save` / `clear`
//! boundary calls, which keep a JSON copy of the session on disk so a
//! restart resumes where the user left off.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::UserRecord;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// In-memory session: the current user, if any
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "currentUser", default, skip_serializing_if = "Option::is_none")]
    current_user: Option<UserRecord>,
}

impl Session {
    /// Signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: UserRecord) {
        self.current_user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Dark-theme preference of the current user; light when signed out
    pub fn prefers_dark(&self) -> bool {
        self.current_user.as_ref().map(|u| u.is_dark).unwrap_or(false)
    }
}

/// File-backed persistence boundary for `Session`
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted session; a missing file is a signed-out session
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no persisted session");
            return Ok(Session::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&contents)?;
        tracing::debug!(path = %self.path.display(), "restored session");
        Ok(session)
    }

    /// Persist the session, creating parent directories as needed
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), "saved session");
        Ok(())
    }

    /// Remove the persisted session, if present
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "cleared session");
        }
        Ok(())
    }
}
