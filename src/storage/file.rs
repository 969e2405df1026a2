//! File-backed storage adapter
//!
//! One file per key under a data directory, written whole on every
//! `set`. This is the durable adapter the app runs on; the menu blob
//! lands in `<data_dir>/menu.json` and survives restarts.

use crate::errors::{MenuError, Result};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Key-value store persisting each key as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `data_dir`, creating it if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;

        Ok(FileStore { data_dir })
    }

    /// Path backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Root directory of this store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MenuError::StorageRead {
                reason: format!("{}: {}", path.display(), e),
            }),
        }
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        tokio::fs::write(&path, value)
            .await
            .map_err(|e| MenuError::StorageWrite {
                reason: format!("{}: {}", path.display(), e),
            })
    }
}
