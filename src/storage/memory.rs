//! In-memory storage adapter
//!
//! A plain map behind the [`KeyValueStore`] contract. Used by tests and
//! by any caller that wants a store without durability. Writes can be
//! made to fail on demand so rollback paths are testable.

use crate::errors::{MenuError, Result};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;

/// Volatile key-value store backed by a HashMap
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one key
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `set` fail until switched off again
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Peek at a stored value without going through the async contract
    pub fn raw_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(MenuError::StorageWrite {
                reason: "write failure injected".to_string(),
            });
        }

        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
