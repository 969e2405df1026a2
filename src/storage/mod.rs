//! Persistent storage adapters
//!
//! The menu is durable as a single JSON blob under a fixed key. The
//! store only ever sees the [`KeyValueStore`] contract, so the backing
//! medium is swappable: files on disk in the app, plain memory in
//! tests.

pub mod file;
pub mod memory;

// Re-export commonly used types
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;
use async_trait::async_trait;

/// Fixed key the serialized menu is stored under
pub const MENU_STORAGE_KEY: &str = "menu";

/// Async key-value string storage
///
/// Values are opaque strings; callers own the serialization. `get` and
/// `set` may suspend, but a caller must not issue overlapping writes
/// for the same key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably store `value` under `key`, replacing any previous value
    async fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
