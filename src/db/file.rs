// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory-backed store with one file per key.
//!
//! Keys are URL-encoded into file names so any key maps to a single flat
//! entry. Entry files carry a store-specific suffix, so other files sharing
//! the directory are never read, counted or removed. Writes go to a temporary file first and are renamed into place,
//! so a reader never observes a half-written value.

use crate::db::store::{StorageError, Store};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ENTRY_SUFFIX: &str = ".wellness.json";
const TEMP_SUFFIX: &str = ".tmp";

/// Durable store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;

        tracing::info!(path = %dir.display(), "Opened file store");

        Ok(Self {
            dir,
            quota_bytes: None,
        })
    }

    /// Limit the total size of stored entries.
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}", urlencoding::encode(key), ENTRY_SUFFIX))
    }

    /// Entry files currently in the directory, as (file name, size) pairs.
    fn entries(&self) -> Result<Vec<(String, u64)>, StorageError> {
        let read_dir = fs::read_dir(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| StorageError::io(&self.dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(ENTRY_SUFFIX) {
                continue;
            }
            let len = entry
                .metadata()
                .map_err(|e| StorageError::io(&entry.path(), e))?
                .len();
            entries.push((name, len));
        }
        Ok(entries)
    }

    /// Bytes used by every entry except the one for `key`.
    fn usage_without(&self, key: &str) -> Result<usize, StorageError> {
        let own = format!("{}{}", urlencoding::encode(key), ENTRY_SUFFIX);
        Ok(self
            .entries()?
            .into_iter()
            .filter(|(name, _)| *name != own)
            .map(|(name, len)| name.len() - ENTRY_SUFFIX.len() + len as usize)
            .sum())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::Unreadable {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.usage_without(key)? + urlencoding::encode(key).len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        let path = self.entry_path(key);
        let mut temp = path.clone().into_os_string();
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        fs::write(&temp, value).map_err(|e| StorageError::io(&temp, e))?;
        fs::rename(&temp, &path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            StorageError::io(&path, e)
        })?;

        tracing::debug!(key, bytes = value.len(), "Wrote store entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        let entries = self.entries()?;
        let count = entries.len();

        for (name, _) in entries {
            let path = self.dir.join(&name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StorageError::io(&path, e)),
            }
        }

        tracing::info!(path = %self.dir.display(), count, "Cleared file store");
        Ok(())
    }
}
