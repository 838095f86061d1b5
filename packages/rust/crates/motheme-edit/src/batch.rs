//! Sequential batch driver.
//!
//! Each notebook is read, edited and written back before the next one is
//! touched. A failure on one file is recorded and the batch moves on.

use std::path::{Path, PathBuf};

use crate::editor::NotebookEditor;
use crate::error::EditError;
use crate::types::{EditConfig, EditOutcome, EditResult, ThemeLookup};

/// What to do to every file in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Set the theme parameter to this css path.
    Apply {
        /// Value written into the parameter.
        css_path: String,
    },
    /// Remove the theme parameter.
    Clear,
    /// Only look up the current theme.
    Inspect,
}

/// Per-file result of a batch.
#[derive(Debug)]
pub enum FileStatus {
    /// Apply / Clear produced an edit result.
    Edited(EditResult),
    /// Inspect looked up the theme.
    Inspected(ThemeLookup),
    /// Reading or writing failed.
    Failed(EditError),
}

/// Statistics and per-file details for a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files processed
    pub files_scanned: usize,
    /// Files whose content changed (or would, in preview mode)
    pub modified_files: Vec<PathBuf>,
    /// Files without a marimo.App block
    pub missing_block: Vec<PathBuf>,
    /// Errors encountered (path, error message)
    pub errors: Vec<(PathBuf, String)>,
    /// Every file in input order with its status
    pub entries: Vec<(PathBuf, FileStatus)>,
}

impl BatchReport {
    /// Create a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files that changed.
    #[must_use]
    pub fn files_changed(&self) -> usize {
        self.modified_files.len()
    }

    /// True when at least one file failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record(&mut self, path: &Path, status: FileStatus) {
        self.files_scanned += 1;
        match &status {
            FileStatus::Edited(result) if result.outcome.is_modified() => {
                self.modified_files.push(path.to_path_buf());
            }
            FileStatus::Edited(result) if result.outcome == EditOutcome::BlockNotFound => {
                self.missing_block.push(path.to_path_buf());
            }
            FileStatus::Inspected(ThemeLookup::BlockNotFound) => {
                self.missing_block.push(path.to_path_buf());
            }
            FileStatus::Failed(error) => {
                self.errors.push((path.to_path_buf(), error.to_string()));
            }
            _ => {}
        }
        self.entries.push((path.to_path_buf(), status));
    }
}

/// Run `operation` over `files` in order.
pub fn process_files<P: AsRef<Path>>(
    editor: &NotebookEditor,
    files: &[P],
    operation: &BatchOperation,
    config: EditConfig,
) -> BatchReport {
    let mut report = BatchReport::new();

    for path in files {
        let path = path.as_ref();
        let status = match operation {
            BatchOperation::Apply { css_path } => editor
                .apply_theme_to_file(path, css_path, config)
                .map_or_else(FileStatus::Failed, FileStatus::Edited),
            BatchOperation::Clear => editor
                .clear_theme_in_file(path, config)
                .map_or_else(FileStatus::Failed, FileStatus::Edited),
            BatchOperation::Inspect => editor
                .current_theme_of_file(path, config)
                .map_or_else(FileStatus::Failed, FileStatus::Inspected),
        };

        if let FileStatus::Failed(error) = &status {
            tracing::warn!(path = %path.display(), error = %error, "failed to process notebook");
        }
        report.record(path, status);
    }

    tracing::info!(
        scanned = report.files_scanned,
        changed = report.files_changed(),
        errors = report.errors.len(),
        "batch finished"
    );
    report
}
