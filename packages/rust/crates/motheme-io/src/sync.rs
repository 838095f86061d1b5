//! Synchronous read / write of notebook files.
//!
//! A notebook is read whole, edited in memory, and written back with one
//! bulk write. Nothing is streamed.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// `NotFound` when the path cannot be stat'ed, `TooLarge` over the limit,
/// `BinaryFile` when NULL bytes are present.
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata =
        fs::metadata(path).map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

/// Replace the file's content with `text` in a single write.
///
/// # Errors
/// `IoError::Write` carrying the target path.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("nb.py");
        write_text(&p, "import marimo\r\n").unwrap();
        assert_eq!(read_text_safe(&p, 1024).unwrap(), "import marimo\r\n");
    }

    #[test]
    fn test_write_missing_parent() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("missing").join("nb.py");
        assert!(matches!(write_text(&p, "x"), Err(IoError::Write { .. })));
    }
}
