//! Decide which files are marimo notebooks.

use std::path::Path;

use crate::sync::read_text_safe;

/// Notebooks larger than this are not considered.
const CLASSIFY_MAX_BYTES: u64 = 8 * 1024 * 1024;

/// Check if a file is a marimo notebook.
///
/// A file qualifies when it:
/// 1. Has a `.py` extension
/// 2. Has an exact `import marimo` line
/// 3. Creates a `marimo.App(` instance
/// 4. Contains at least one `@app.cell` decorator
///
/// Unreadable files are never notebooks.
#[must_use]
pub fn is_marimo_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.extension().is_none_or(|ext| ext != "py") {
        return false;
    }

    match read_text_safe(path, CLASSIFY_MAX_BYTES) {
        Ok(content) => is_marimo_source(&content),
        Err(error) => {
            tracing::debug!(path = %path.display(), error = %error, "not classifiable");
            false
        }
    }
}

/// Content half of [`is_marimo_file`].
#[must_use]
pub fn is_marimo_source(content: &str) -> bool {
    let has_exact_import = content
        .lines()
        .any(|line| line.trim_end() == "import marimo");

    has_exact_import && content.contains("marimo.App(") && content.contains("@app.cell")
}
