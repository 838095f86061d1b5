//! Error types for notebook file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for file I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exceeds size limit.
    #[error("File too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains binary content (NULL bytes detected).
    #[error("Binary file detected")]
    BinaryFile,

    /// Writing the new content back failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An ignore glob could not be compiled.
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending glob.
        pattern: String,
        /// Message from globset.
        message: String,
    },

    /// No usable data directory on this platform.
    #[error("Could not determine a data directory for themes")]
    NoDataDir,

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}
