//! Persistent key-value slots backing the session.
//!
//! DESIGN
//! ======
//! The session keeps two named slots (serialized user, raw token). Backends
//! only deal in strings; JSON encoding lives in the typed helpers below so
//! every backend stores the same representation.
//!
//! Layout of [`FileStorage`]:
//!
//! ```text
//! <base_dir>/
//! ├── themplus_user      # JSON user record
//! └── themplus_token     # raw bearer token
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Slot holding the serialized current user.
pub const USER_KEY: &str = "themplus_user";
/// Slot holding the bearer token.
pub const TOKEN_KEY: &str = "themplus_token";

/// String key-value storage that survives process restarts.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value for `key`. Missing keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] if the backend fails or the stored text is not valid JSON for `T`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Serialize { key: key.to_owned(), source })
}

/// Save `value` as JSON under `key`, or remove the slot when `value` is `None`.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the backend write fails.
pub fn save_json<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, value: Option<&T>) -> Result<(), StorageError> {
    match value {
        None => storage.remove(key),
        Some(value) => {
            let raw = serde_json::to_string(value)
                .map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
            storage.set(key, &raw)
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// One file per key under a base directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key: key.to_owned(), source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io { key: key.to_owned(), source };
        std::fs::create_dir_all(&self.base).map_err(io_err)?;
        std::fs::write(self.slot_path(key), value).map_err(io_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key: key.to_owned(), source }),
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
