#![allow(clippy::doc_markdown)]

//! motheme-edit - Block-level editing of marimo.App declarations
//!
//! Finds the `app = marimo.App(...)` invocation in a notebook, however its
//! arguments are wrapped, flattens it to one line, edits a named parameter
//! and splices the result back. Every line outside the block is left
//! byte-identical.
//!
//! # Features
//!
//! - **Block Locator**: Balanced-parenthesis scan, first match wins
//! - **Block Rewriter**: Replace the located line range with one line
//! - **Parameter Editor**: Idempotent `Set` / `Remove` on flattened text
//! - **Notebook Editor**: apply / clear / current over whole files
//! - **Batch**: Sequential per-file processing with per-file errors
//! - **Diff Preview**: Unified diffs for `--dry-run`
//!
//! # Architecture
//!
//! ```text
//! motheme-edit/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # EditError enum (thiserror)
//! ├── types.rs    # Block, EditResult, EditOutcome, EditConfig
//! ├── lines.rs    # Terminator-preserving line splitting
//! ├── locator.rs  # locate()
//! ├── rewriter.rs # rewrite()
//! ├── params.rs   # ParameterEdit, set_param(), remove_param()
//! ├── diff.rs     # Diff generation utilities
//! ├── editor.rs   # NotebookEditor
//! └── batch.rs    # Sequential batch driver
//! ```
//!
//! # Example
//!
//! ```rust
//! use motheme_edit::{locate, rewrite, set_param};
//!
//! let lines = ["import marimo", "app = marimo.App(", "    width=\"full\",", ")"];
//! let block = locate(&lines, "app = marimo.App(").unwrap();
//! let edited = set_param(&block.content, "css_file", "dark.css");
//! let out = rewrite(&lines, &block, edited);
//! assert_eq!(out[1], "app = marimo.App(css_file=\"dark.css\", width=\"full\",)");
//! ```

mod batch;
mod editor;
mod error;
mod lines;
mod locator;
mod params;
mod rewriter;
mod types;

pub mod diff;

pub use batch::{BatchOperation, BatchReport, FileStatus, process_files};
pub use editor::{DEFAULT_MARKER, DEFAULT_PARAMETER, NotebookEditor};
pub use error::EditError;
pub use lines::{line_body, line_terminator, split_lines};
pub use locator::locate;
pub use params::{ParameterEdit, quoted_param, remove_param, set_param};
pub use rewriter::rewrite;
pub use types::{Block, EditConfig, EditOutcome, EditResult, ThemeLookup};

// Re-export diff utility for external use
pub use diff::generate_unified_diff;
