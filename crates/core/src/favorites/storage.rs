//! Pluggable key-value storage for locally persisted data.
//!
//! The favorites store only needs load/save/exists over opaque bytes, so the
//! platform shell decides where those bytes live (app data directory on
//! device, a temp directory in previews, memory in tests).

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Asynchronous key-value storage over opaque byte payloads.
pub trait KeyValueStorage: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = StorageResult<Option<Vec<u8>>>> + Send + 'a>>;

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = StorageResult<()>> + Send + 'a>>;

    fn exists<'a>(&'a self, key: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}

/// One JSON file per key under a root directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = StorageResult<Option<Vec<u8>>>> + Send + 'a>> {
        Box::pin(async move {
            match tokio::fs::read(self.path_for(key)).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = StorageResult<()>> + Send + 'a>> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.root).await?;
            tokio::fs::write(self.path_for(key), data).await?;
            Ok(())
        })
    }

    fn exists<'a>(&'a self, key: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move { tokio::fs::try_exists(self.path_for(key)).await.unwrap_or(false) })
    }
}

/// In-memory storage for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = StorageResult<Option<Vec<u8>>>> + Send + 'a>> {
        Box::pin(async move { Ok(self.entries.lock().await.get(key).cloned()) })
    }

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = StorageResult<()>> + Send + 'a>> {
        Box::pin(async move {
            self.entries.lock().await.insert(key.to_owned(), data.to_vec());
            Ok(())
        })
    }

    fn exists<'a>(&'a self, key: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move { self.entries.lock().await.contains_key(key) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.load("k").await.unwrap(), None);
        assert!(!storage.exists("k").await);

        storage.save("k", b"payload").await.unwrap();
        assert!(storage.exists("k").await);
        assert_eq!(storage.load("k").await.unwrap().as_deref(), Some(&b"payload"[..]));
    }

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let root = std::env::temp_dir().join(format!(
            "gil-storage-test-{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let storage = FileStorage::new(&root);

        assert_eq!(storage.load("favorites").await.unwrap(), None);

        storage.save("favorites", b"[]").await.unwrap();
        assert!(storage.exists("favorites").await);
        assert_eq!(storage.load("favorites").await.unwrap().as_deref(), Some(&b"[]"[..]));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
