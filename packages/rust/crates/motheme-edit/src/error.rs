//! Error types for notebook editing.
//!
//! A missing block or an absent parameter is not an error; both are
//! reported through [`EditOutcome`](crate::EditOutcome). Only the file
//! layer can fail.

use motheme_io::IoError;
use thiserror::Error;

/// Error types for edit operations.
#[derive(Error, Debug)]
pub enum EditError {
    /// Reading or writing the notebook failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}
