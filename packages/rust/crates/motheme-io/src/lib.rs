#![allow(clippy::doc_markdown)]

//! motheme-io - File handling for marimo notebook theming
//!
//! Everything that touches the filesystem before or after a block edit
//! lives here, so the editing core can stay a set of pure functions.
//!
//! # Features
//!
//! - **Safe reads**: Binary detection & Size limits
//! - **Bulk writes**: New content is written back in a single call
//! - **Classification**: Decide whether a path is a marimo notebook
//! - **Expansion**: Turn CLI inputs into a concrete notebook list (recursive, ignore-aware)
//! - **Data dirs**: Resolve where downloaded themes are stored
//!
//! # Architecture
//!
//! ```text
//! motheme-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! ├── sync.rs     # read_text_safe / write_text
//! ├── classify.rs # is_marimo_file
//! ├── discover.rs # expand_files + IgnoreList
//! └── dirs.rs     # Theme store location
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use motheme_io::{expand_files, read_text_safe, IgnoreList};
//!
//! let files = expand_files(&["notebooks".into()], true, &IgnoreList::empty());
//! for file in files {
//!     let content = read_text_safe(&file, 1024 * 1024)?;
//! }
//! ```

mod classify;
mod detect;
mod dirs;
mod discover;
mod error;
mod sync;

pub use classify::{is_marimo_file, is_marimo_source};
pub use detect::{decode_buffer, is_binary};
pub use dirs::{THEMES_DIR_ENV, default_themes_dir, ensure_dir, resolve_themes_dir};
pub use discover::{IgnoreList, expand_files};
pub use error::IoError;
pub use sync::{read_text_safe, write_text};
