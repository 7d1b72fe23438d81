//! Local filesystem storage backend

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::TryStreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{StorageError, StorageResult};
use crate::traits::{normalize_path, ByteStream, FileStore};

/// Local filesystem storage
///
/// Files live at `{root}/{normalized request path}`. The process owns the
/// root subtree exclusively; no external writer is assumed.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create storage rooted at the given directory, creating it if missing.
    pub async fn new(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn file_path(&self, path: &str) -> StorageResult<PathBuf> {
        let normalized = normalize_path(path)?;
        Ok(self.root.join(normalized))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, path: &str, mut body: ByteStream<'_>) -> StorageResult<u64> {
        let full = self.file_path(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&full).await?;
        let mut written = 0u64;
        let result: StorageResult<()> = async {
            while let Some(chunk) = body.try_next().await? {
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(e) = result {
            // An aborted upload must not leave a truncated file readable.
            drop(file);
            let _ = fs::remove_file(&full).await;
            return Err(e);
        }

        Ok(written)
    }

    async fn get(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full = self.file_path(path)?;
        match fs::read(&full).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        let full = self.file_path(path)?;
        Ok(full.exists())
    }
}
