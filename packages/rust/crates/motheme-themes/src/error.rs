//! Error types for theme store and downloader operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors for theme operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Requested theme has no css file in the store.
    #[error("Theme {name} not found (looked for {})", path.display())]
    NotFound {
        /// Requested theme name.
        name: String,
        /// Path that was checked.
        path: PathBuf,
        /// Themes that do exist, sorted.
        available: Vec<String>,
    },

    /// Target theme of a create already exists.
    #[error("Theme '{0}' already exists.")]
    AlreadyExists(String),

    /// Filesystem failure inside the store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store directory could not be resolved or created.
    #[error(transparent)]
    Store(#[from] motheme_io::IoError),

    /// HTTP request failed or returned an error status.
    #[error("Error downloading themes: {0}")]
    Http(#[from] reqwest::Error),

    /// File body from the contents API was not valid base64 / UTF-8.
    #[error("Failed to decode {name}: {message}")]
    Decode {
        /// Theme being decoded.
        name: String,
        /// Decoder message.
        message: String,
    },
}
