use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

/// Keys the crate persists under. No other persisted schema exists.
pub mod keys {
    /// Opaque bearer token authorizing API calls.
    pub const TOKEN: &str = "token";
    /// Serialized login response (email, display name, phone, image URI).
    pub const USER_PROFILE: &str = "user";
    /// Identifier of the single classroom this device is joined to.
    pub const CLASSROOM_ID: &str = "classroom";
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("credential storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("credential store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Async key/value store for session state, backed by a JSON file.
///
/// Every mutation is written through to disk before returning, so stored
/// values survive process restarts. Clone is cheap - handles share one
/// in-memory map and file path.
#[derive(Clone)]
pub struct CredentialStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl CredentialStore {
    /// Open the store at `path`, loading any existing entries.
    /// A missing file is an empty store, not an error.
    pub async fn open(path: PathBuf) -> Result<Self, StorageError> {
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), entries = entries.len(), "opened credential store");

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                entries: Mutex::new(entries),
            }),
        })
    }

    /// Read a value. Absence means the key was never set or was removed.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.inner.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    /// Set a value, overwriting any previous one.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.inner.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    /// Remove a key. Removing an absent key is not an error.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.inner.entries.lock().await;
        entries.remove(key);
        self.flush(&entries).await
    }

    /// Remove every key, including the session token and profile blob.
    /// Callers must re-derive anything they still need before calling this.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.inner.entries.lock().await;
        entries.clear();
        self.flush(&entries).await
    }

    // Write-through inside the lock so on-disk state matches mutation order.
    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.inner.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.inner.path, contents).await?;
        Ok(())
    }
}
