//! Storage trait definitions

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::error::{StorageError, StorageResult};

/// Incoming file content as a fallible byte stream.
///
/// A stream error means the producer (typically an HTTP request body)
/// failed mid-transfer; implementations must surface it rather than keep a
/// truncated file.
pub type ByteStream<'a> = BoxStream<'a, std::io::Result<Bytes>>;

/// Reduce a request path to its canonical relative form.
///
/// Splits on `/`, discards empty segments, and rejects `.` and `..` so a
/// stored file can never resolve outside the storage root. An empty result
/// is rejected too: every file needs at least one segment.
pub fn normalize_path(path: &str) -> StorageResult<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(segments.join("/"))
}

/// Path-addressed file storage.
///
/// All operations take the request path as given; implementations normalize
/// it via [`normalize_path`] so every backend agrees on addressing.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stream `body` into the file at `path`, creating intermediate
    /// directories as needed. An existing file is overwritten; concurrent
    /// writers to the same path race and the last completed stream wins.
    ///
    /// Returns the number of bytes written.
    async fn put(&self, path: &str, body: ByteStream<'_>) -> StorageResult<u64>;

    /// Read the full contents of the file at `path`.
    ///
    /// Returns `StorageError::NotFound` if there is no such file.
    async fn get(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Check whether a file exists at `path`.
    async fn exists(&self, path: &str) -> StorageResult<bool>;
}
