// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value store contract shared by every backend.

/// Origin-scoped key-value storage.
///
/// Values are opaque strings; the repository layer owns serialization.
/// Every write replaces the previous value under the key.
pub trait Store: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key held by this store.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Errors from storage backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Failed to serialize '{key}': {reason}")]
    Serialization { key: String, reason: String },

    /// The entry exists but its bytes are not valid UTF-8.
    #[error("Stored value for '{key}' is not valid text: {reason}")]
    Unreadable { key: String, reason: String },
}

impl StorageError {
    /// Build an I/O error tagged with the path that failed.
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        StorageError::Io(format!("{}: {}", path.display(), err))
    }
}
