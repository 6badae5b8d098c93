// ABOUTME: File-backed key-value store holding all entries in one JSON object
// ABOUTME: Loads the document on open and rewrites it atomically on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Store persisted as `{"key": "value", ...}` in a single file
///
/// Entries are cached in memory; each write replaces the file through a
/// temporary sibling and a rename. A write that fails is rolled back in
/// memory so the cache never diverges from disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStore {
    /// Open the store at `path`, starting empty when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read and
    /// `SerializationError` when it is not a JSON object of strings
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Entries::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                AppError::serialization(format!(
                    "Store file {} is not a JSON object of strings",
                    path.display()
                ))
                .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Entries::new(),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read store file {}",
                    path.display()
                ))
                .with_source(e))
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("File store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn persist(&self, entries: &Entries) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}", parent.display())).with_source(e)
            })?;
        }

        let document = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, document).map_err(|e| {
            AppError::storage(format!("Failed to write {}", tmp_path.display())).with_source(e)
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", self.path.display())).with_source(e)
        })
    }

    /// Apply `change` and persist; restore the previous value on failure
    fn write_through(&self, key: &str, change: Option<&str>) -> bool {
        let mut entries = self.lock();
        let previous = match change {
            Some(value) => entries.insert(key.to_owned(), value.to_owned()),
            None => entries.remove(key),
        };
        if change.is_none() && previous.is_none() {
            return true;
        }

        match self.persist(&entries) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), key, error = %e, "File store write failed");
                if let Some(old) = previous {
                    entries.insert(key.to_owned(), old);
                } else {
                    entries.remove(key);
                }
                false
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.write_through(key, Some(value))
    }

    fn remove(&self, key: &str) -> bool {
        self.write_through(key, None)
    }
}
