//! Session token storage
//!
//! Exactly one token is active at a time: setting a new token silently
//! replaces the old one, clearing is idempotent. The token is an opaque
//! credential — no expiry is tracked locally; expiry is only detected
//! through a failed call.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// File name of the single persisted session entry
const SESSION_FILE: &str = "session_token.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Holds the active session token, optionally backed by a JSON file.
///
/// Clones share the same in-memory slot, so every handle observes
/// `set`/`clear` immediately.
#[derive(Debug, Clone)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// In-memory store with no persistence
    pub fn in_memory() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Store persisted under `dir`, preloaded from disk if a session
    /// file exists. An unreadable or malformed file loads as "no token".
    pub fn persistent(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(SESSION_FILE);
        let token = Self::load_file(&path);
        Self {
            token: Arc::new(RwLock::new(token)),
            path: Some(path),
        }
    }

    fn load_file(path: &Path) -> Option<String> {
        if !path.exists() {
            return None;
        }
        let json = fs::read_to_string(path).ok()?;
        let stored: StoredSession = serde_json::from_str(&json).ok()?;
        Some(stored.token)
    }

    /// Get the current token
    pub fn get(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Whether a token is set
    pub fn has(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }

    /// Replace the active token
    pub fn set(&self, token: impl Into<String>) -> ClientResult<()> {
        let token = token.into();
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&StoredSession {
                token: token.clone(),
            })?;
            fs::write(path, json)?;
        }
        *self.token.write().expect("session lock poisoned") = Some(token);
        tracing::debug!("Session token stored");
        Ok(())
    }

    /// Clear the active token. Idempotent.
    pub fn clear(&self) -> ClientResult<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        *self.token.write().expect("session lock poisoned") = None;
        tracing::debug!("Session token cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        assert!(!store.has());

        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn clones_share_the_token() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.set("tok").unwrap();
        assert_eq!(other.get().as_deref(), Some("tok"));
        other.clear().unwrap();
        assert!(!store.has());
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::persistent(dir.path());
        store.set("persisted").unwrap();

        let reloaded = SessionStore::persistent(dir.path());
        assert_eq!(reloaded.get().as_deref(), Some("persisted"));

        reloaded.clear().unwrap();
        let empty = SessionStore::persistent(dir.path());
        assert!(!empty.has());
    }

    #[test]
    fn malformed_file_loads_as_no_token() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();
        let store = SessionStore::persistent(dir.path());
        assert!(!store.has());
    }
}
