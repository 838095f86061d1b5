//! Location of the local theme store.
//!
//! Resolution order:
//! 1. `MOTHEME_THEMES_DIR` environment variable
//! 2. Explicit override (the `themes_dir` setting)
//! 3. `<data_dir>/mtheme/themes`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Environment variable that overrides the theme store location.
pub const THEMES_DIR_ENV: &str = "MOTHEME_THEMES_DIR";

/// `<data_dir>/mtheme/themes` for the current platform.
///
/// # Errors
/// `IoError::NoDataDir` when the platform has no data directory.
pub fn default_themes_dir() -> Result<PathBuf, IoError> {
    dirs::data_dir()
        .map(|base| base.join("mtheme").join("themes"))
        .ok_or(IoError::NoDataDir)
}

/// Resolve the theme store directory without creating it.
///
/// # Errors
/// Propagates [`default_themes_dir`] when nothing overrides it.
pub fn resolve_themes_dir(configured: Option<&Path>) -> Result<PathBuf, IoError> {
    let from_env = env::var(THEMES_DIR_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    if let Some(dir) = from_env {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    default_themes_dir()
}

/// Create `dir` (and parents) if missing, returning it.
///
/// # Errors
/// `IoError::System` when creation fails.
pub fn ensure_dir(dir: &Path) -> Result<&Path, IoError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "created directory");
    }
    Ok(dir)
}
