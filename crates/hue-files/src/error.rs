//! Error types for file reads

use std::path::PathBuf;

/// Errors that can occur while reading a theme file
#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    /// The host file system rejected the read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8 text
    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// The reader could not attempt the read at all
    #[error("File read unavailable: {0}")]
    Unavailable(String),
}

impl ReadFailure {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure means the file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, ReadFailure>;
