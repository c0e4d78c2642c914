//! Error types for the themes module

use hue_files::ReadFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme {theme}: {source}")]
    Read {
        theme: String,
        #[source]
        source: ReadFailure,
    },

    #[error("Failed to compile theme {class_name}: {message}")]
    Compile { class_name: String, message: String },

    #[error("Theme not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
