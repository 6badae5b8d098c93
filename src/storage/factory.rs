// ABOUTME: Storage factory for environment-based backend selection
// ABOUTME: Turns a StorageConfig into a boxed KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileStore, InMemoryStore, KeyValueStore};
use crate::config::{StorageBackend, StorageConfig};
use crate::errors::AppResult;
use tracing::info;

/// Open the backend named by `config`
///
/// # Errors
///
/// Returns an error if the file store document exists but cannot be loaded
pub fn open_store(config: &StorageConfig) -> AppResult<Box<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Initializing in-memory store");
            Ok(Box::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            let path = config.store_path();
            info!(path = %path.display(), "Initializing file store");
            Ok(Box::new(FileStore::open(path)?))
        }
    }
}
