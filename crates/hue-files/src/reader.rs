//! Asynchronous file reading capability

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ReadFailure, Result};

/// Reads the full text content of a file
///
/// Implementations resolve with the raw text or fail with the underlying
/// read error. Theme entities receive a reader at construction time.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Read the whole file at `path` as UTF-8 text
    async fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// `FileReader` backed by `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct FsFileReader;

impl FsFileReader {
    /// Create a new file system reader
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileReader for FsFileReader {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ReadFailure::io(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        String::from_utf8(bytes).map_err(|_| ReadFailure::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    }
}
