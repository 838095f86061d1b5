//! Binary detection and decoding for notebook sources.

use memchr::memchr;

use crate::error::IoError;

/// Bytes inspected by [`is_binary`].
const SNIFF_LEN: usize = 8192;

/// Returns true when a NULL byte occurs in the first 8KB.
///
/// Python notebooks never contain NULL bytes, so this is enough to reject
/// compiled artifacts that happen to end in `.py`.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let head = &buffer[..buffer.len().min(SNIFF_LEN)];
    memchr(0, head).is_some()
}

/// Decode file bytes into text.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).or_else(|err| {
        tracing::debug!("lossy utf-8 decode");
        Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
    })
}
