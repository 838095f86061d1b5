#![allow(clippy::doc_markdown)]

//! motheme-themes - Local theme store and GitHub theme downloader
//!
//! Themes are plain `.css` files named after the theme (`coffee.css`) in a
//! single directory. The downloader mirrors the `themes/<name>/<name>.css`
//! layout of a GitHub repository into that directory.
//!
//! # Architecture
//!
//! ```text
//! motheme-themes/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # ThemeError enum (thiserror)
//! ├── store.rs      # ThemeStore: list / resolve / create / remove
//! └── downloader.rs # ThemeDownloader (reqwest + base64)
//! ```

mod downloader;
mod error;
mod store;

pub use downloader::{
    DEFAULT_REPO_URL, DownloadReport, ThemeDownloader, decode_content, to_api_url,
};
pub use error::ThemeError;
pub use store::{RemovalPlan, THEME_EXTENSION, ThemeStore};
