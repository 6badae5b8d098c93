// ABOUTME: Key-value storage abstraction for persisting client state
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one synchronous trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// JSON document on disk
pub mod file;
/// Process-local concurrent map
pub mod memory;

use std::sync::Arc;

pub use factory::open_store;
pub use file::FileStore;
pub use memory::InMemoryStore;

/// String key-value store injected into the profile repository
///
/// Writes report success as a `bool` instead of an error: a failed write is
/// logged by the backend and the caller decides whether to surface it.
///
/// # Examples
///
/// ```rust
/// use fittrack::storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// assert!(store.set("greeting", "hello"));
/// assert_eq!(store.get("greeting").as_deref(), Some("hello"));
/// assert!(store.remove("greeting"));
/// assert_eq!(store.get("greeting"), None);
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`; `true` when the write was persisted
    fn set(&self, key: &str, value: &str) -> bool;

    /// Delete `key`; `true` when the key is absent afterwards
    fn remove(&self, key: &str) -> bool;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}
