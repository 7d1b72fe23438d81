//! In-memory storage backend (for testing)

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use futures_util::TryStreamExt;

use crate::error::{StorageError, StorageResult};
use crate::traits::{normalize_path, ByteStream, FileStore};

/// In-memory storage for unit tests
///
/// Thread-safe via `RwLock`. Not persistent — data lost on drop.
#[derive(Default)]
pub struct InMemoryFileStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn put(&self, path: &str, mut body: ByteStream<'_>) -> StorageResult<u64> {
        let key = normalize_path(path)?;

        let mut data = Vec::new();
        while let Some(chunk) = body.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        let written = data.len() as u64;
        self.files.write().unwrap().insert(key, data);
        Ok(written)
    }

    async fn get(&self, path: &str) -> StorageResult<Vec<u8>> {
        let key = normalize_path(path)?;
        self.files
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        let key = normalize_path(path)?;
        Ok(self.files.read().unwrap().contains_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures_util::{stream, StreamExt};

    fn body(chunks: &[&[u8]]) -> ByteStream<'static> {
        let owned: Vec<std::io::Result<Bytes>> = chunks
            .iter()
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();
        stream::iter(owned).boxed()
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let store = InMemoryFileStore::new();
        let written = store.put("abc", body(&[b"hello, ", b"store"])).await.unwrap();
        assert_eq!(written, 12);
        assert_eq!(store.get("abc").await.unwrap(), b"hello, store");
    }

    #[tokio::test]
    async fn test_leading_slash_same_file() {
        let store = InMemoryFileStore::new();
        store.put("/abc", body(&[b"x"])).await.unwrap();
        assert_eq!(store.get("abc").await.unwrap(), b"x");
    }

    #[tokio::test]
    async fn test_not_found() {
        let store = InMemoryFileStore::new();
        assert!(matches!(
            store.get("missing").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_overwrite_last_write_wins() {
        let store = InMemoryFileStore::new();
        store.put("abc", body(&[b"first"])).await.unwrap();
        store.put("abc", body(&[b"second"])).await.unwrap();
        assert_eq!(store.get("abc").await.unwrap(), b"second");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_exists() {
        let store = InMemoryFileStore::new();
        assert!(!store.exists("abc").await.unwrap());
        store.put("abc", body(&[b"x"])).await.unwrap();
        assert!(store.exists("abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_stream_error_stores_nothing() {
        let store = InMemoryFileStore::new();
        let failing = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("client went away")),
        ])
        .boxed();

        assert!(store.put("abc", failing).await.is_err());
        assert!(!store.exists("abc").await.unwrap());
    }
}
