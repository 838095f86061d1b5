//! User settings for motheme.
//!
//! Loaded from `<config_dir>/motheme/settings.yaml`, or the file passed via
//! `--conf`. Every field is optional; a missing or broken file yields the
//! defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use motheme_edit::{DEFAULT_MARKER, DEFAULT_PARAMETER, NotebookEditor};
use motheme_themes::DEFAULT_REPO_URL;

const DEFAULT_SETTINGS_RELATIVE_PATH: &str = "motheme/settings.yaml";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Theme store location (the `MOTHEME_THEMES_DIR` env var still wins).
    pub themes_dir: Option<PathBuf>,
    /// GitHub repository themes are downloaded from.
    pub repo_url: Option<String>,
    /// Globs excluded from every file selection.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Text that opens the app declaration (default `app = marimo.App(`).
    pub marker: Option<String>,
    /// Parameter holding the stylesheet path (default `css_file`).
    pub parameter: Option<String>,
    /// HTTP timeout for theme downloads (default 10).
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Configured repository, or the default one.
    #[must_use]
    pub fn repo_url(&self) -> &str {
        self.repo_url.as_deref().unwrap_or(DEFAULT_REPO_URL)
    }

    /// Download timeout; zero or unset means 10 seconds.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Editor configured with the marker / parameter overrides.
    #[must_use]
    pub fn editor(&self) -> NotebookEditor {
        NotebookEditor::new(
            self.marker.as_deref().unwrap_or(DEFAULT_MARKER),
            self.parameter.as_deref().unwrap_or(DEFAULT_PARAMETER),
        )
    }
}

/// `<config_dir>/motheme/settings.yaml`, when the platform has a config dir.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(DEFAULT_SETTINGS_RELATIVE_PATH))
}

/// Load settings from `conf`, falling back to [`default_settings_path`].
#[must_use]
pub fn load_settings(conf: Option<&Path>) -> Settings {
    match conf.map(Path::to_path_buf).or_else(default_settings_path) {
        Some(path) => load_settings_from_path(&path),
        None => Settings::default(),
    }
}

/// Load one settings file. Missing, unreadable or invalid files yield the
/// defaults.
#[must_use]
pub fn load_settings_from_path(path: &Path) -> Settings {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file; using defaults");
        return Settings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return Settings::default();
        }
    };
    if raw.trim().is_empty() {
        return Settings::default();
    }
    match serde_yaml::from_str::<Settings>(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            Settings::default()
        }
    }
}
