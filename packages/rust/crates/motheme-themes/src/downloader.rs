//! Download themes from a GitHub repository via the contents API.
//!
//! Layout expected in the repository:
//!
//! ```text
//! themes/
//! ├── coffee/coffee.css
//! └── wigwam/wigwam.css
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Client;
use serde::Deserialize;

use crate::error::ThemeError;
use crate::store::ThemeStore;

/// Repository themes are fetched from by default.
pub const DEFAULT_REPO_URL: &str = "https://github.com/metaboulie/marimo-themes";

const USER_AGENT: &str = concat!("motheme/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct FileContent {
    content: String,
}

/// Outcome of [`ThemeDownloader::download_all`].
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Stylesheets written into the store.
    pub downloaded: Vec<PathBuf>,
    /// Themes that failed (name, error message).
    pub failed: Vec<(String, String)>,
}

/// Convert `https://github.com/<owner>/<repo>` into its API base URL.
#[must_use]
pub fn to_api_url(repo_url: &str) -> String {
    repo_url
        .trim_end_matches('/')
        .replace("https://github.com", "https://api.github.com/repos")
}

/// Decode a contents-API `content` field (base64 wrapped at 60 columns).
///
/// # Errors
/// `ThemeError::Decode` on invalid base64 or non UTF-8 output.
pub fn decode_content(name: &str, content: &str) -> Result<String, ThemeError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact).map_err(|e| ThemeError::Decode {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ThemeError::Decode {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Fetches theme stylesheets into a [`ThemeStore`].
pub struct ThemeDownloader {
    client: Client,
    api_base: String,
}

impl ThemeDownloader {
    /// Downloader for a GitHub repository URL.
    ///
    /// # Errors
    /// `ThemeError::Http` when the HTTP client cannot be built.
    pub fn new(repo_url: &str, timeout: Duration) -> Result<Self, ThemeError> {
        Self::with_api_base(&to_api_url(repo_url), timeout)
    }

    /// Downloader talking to an explicit API base (`.../repos/<owner>/<repo>`).
    ///
    /// # Errors
    /// `ThemeError::Http` when the HTTP client cannot be built.
    pub fn with_api_base(api_base: &str, timeout: Duration) -> Result<Self, ThemeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// API base URL in use.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn list_theme_names(&self) -> Result<Vec<String>, ThemeError> {
        let url = format!("{}/contents/themes", self.api_base);
        let entries: Vec<ContentEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == "dir")
            .map(|entry| entry.name)
            .collect())
    }

    /// Fetch and decode one theme's stylesheet.
    ///
    /// # Errors
    /// `Http` on request failure, `Decode` on a malformed body.
    pub async fn fetch_theme(&self, name: &str) -> Result<String, ThemeError> {
        let url = format!("{}/contents/themes/{name}/{name}.css", self.api_base);
        let file: FileContent = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode_content(name, &file.content)
    }

    /// Download every theme directory into `store`.
    ///
    /// Failing to list themes aborts; a failing individual theme is recorded
    /// in the report and the rest continue.
    ///
    /// # Errors
    /// `ThemeError::Http` when the theme listing cannot be fetched.
    pub async fn download_all(&self, store: &ThemeStore) -> Result<DownloadReport, ThemeError> {
        let started = Instant::now();
        let names = self.list_theme_names().await?;
        tracing::debug!(api = %self.api_base, count = names.len(), "listed remote themes");

        let mut report = DownloadReport::default();
        for name in names {
            let saved = match self.fetch_theme(&name).await {
                Ok(css) => store.save(&name, &css),
                Err(error) => Err(error),
            };
            match saved {
                Ok(path) => report.downloaded.push(path),
                Err(error) => {
                    tracing::warn!(theme = %name, error = %error, "theme download failed");
                    report.failed.push((name, error.to_string()));
                }
            }
        }

        tracing::info!(
            downloaded = report.downloaded.len(),
            failed = report.failed.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "theme download finished"
        );
        Ok(report)
    }
}
