//! Notebook-level editor.
//!
//! Composes Locator -> Parameter Editor -> Rewriter over a whole file. The
//! block is located on terminator-stripped lines so continuation lines
//! flatten cleanly; the terminator of the block's last line is re-attached
//! to the replacement, and every other line is written back verbatim.

use std::path::Path;

use crate::diff::generate_labeled_diff;
use crate::error::EditError;
use crate::lines::{line_body, line_terminator, split_lines};
use crate::locator::locate;
use crate::params::{ParameterEdit, quoted_param};
use crate::rewriter::rewrite;
use crate::types::{EditConfig, EditOutcome, EditResult, ThemeLookup};

/// Marker that opens the marimo application declaration.
pub const DEFAULT_MARKER: &str = "app = marimo.App(";

/// Parameter that carries the theme stylesheet.
pub const DEFAULT_PARAMETER: &str = "css_file";

/// Applies theme edits to marimo notebooks.
///
/// # Example
///
/// ```rust
/// use motheme_edit::{EditOutcome, NotebookEditor};
///
/// let editor = NotebookEditor::default();
/// let result = editor.apply_theme("import marimo\napp = marimo.App()\n", "dark.css");
/// assert_eq!(result.outcome, EditOutcome::Applied);
/// assert_eq!(result.modified, "import marimo\napp = marimo.App(css_file=\"dark.css\")\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookEditor {
    marker: String,
    parameter: String,
}

impl Default for NotebookEditor {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_PARAMETER)
    }
}

impl NotebookEditor {
    /// Editor for a custom marker / parameter pair.
    pub fn new(marker: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            parameter: parameter.into(),
        }
    }

    /// Marker string this editor looks for.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Parameter name this editor sets and removes.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Run one locate -> edit -> rewrite cycle over `content`.
    ///
    /// `None` when the block is missing; otherwise the new text, which may
    /// equal `content`.
    fn edit_block(&self, content: &str, edit: &ParameterEdit) -> Option<String> {
        let lines = split_lines(content);
        let bodies: Vec<&str> = lines.iter().map(|l| line_body(l)).collect();

        let block = locate(&bodies, &self.marker)?;
        let edited = edit.apply(&block.content);
        if edited == block.content {
            return Some(content.to_string());
        }

        let terminator = line_terminator(&lines[block.end_line]);
        Some(rewrite(&lines, &block, format!("{edited}{terminator}")).concat())
    }

    fn finish(content: &str, modified: String, outcome: EditOutcome) -> EditResult {
        let diff = generate_labeled_diff("original", "modified", content, &modified);
        EditResult {
            original: content.to_string(),
            modified,
            outcome,
            diff,
        }
    }

    /// Point the notebook at `css_path`.
    #[must_use]
    pub fn apply_theme(&self, content: &str, css_path: &str) -> EditResult {
        let edit = ParameterEdit::set(&self.parameter, css_path);
        match self.edit_block(content, &edit) {
            None => EditResult::untouched(content, EditOutcome::BlockNotFound),
            Some(modified) if modified == content => {
                EditResult::untouched(content, EditOutcome::Unchanged)
            }
            Some(modified) => Self::finish(content, modified, EditOutcome::Applied),
        }
    }

    /// Remove the theme parameter from the notebook.
    #[must_use]
    pub fn clear_theme(&self, content: &str) -> EditResult {
        let edit = ParameterEdit::remove(&self.parameter);
        match self.edit_block(content, &edit) {
            None => EditResult::untouched(content, EditOutcome::BlockNotFound),
            Some(modified) if modified == content => {
                EditResult::untouched(content, EditOutcome::ParameterAbsent)
            }
            Some(modified) => Self::finish(content, modified, EditOutcome::Cleared),
        }
    }

    /// Report which theme the notebook references.
    #[must_use]
    pub fn current_theme(&self, content: &str) -> ThemeLookup {
        let lines = split_lines(content);
        let bodies: Vec<&str> = lines.iter().map(|l| line_body(l)).collect();

        let Some(block) = locate(&bodies, &self.marker) else {
            return ThemeLookup::BlockNotFound;
        };

        quoted_param(&block.content, &self.parameter)
            .and_then(|css| {
                Path::new(&css)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .map_or(ThemeLookup::NoTheme, ThemeLookup::Theme)
    }

    /// [`apply_theme`](Self::apply_theme) on a file.
    ///
    /// The file is written only when `config.preview_only` is false and the
    /// content changed.
    ///
    /// # Errors
    /// `EditError::Io` when the file cannot be read or written.
    pub fn apply_theme_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        css_path: &str,
        config: EditConfig,
    ) -> Result<EditResult, EditError> {
        let path = path.as_ref();
        let content = motheme_io::read_text_safe(path, config.max_file_size)?;
        let result = self.apply_theme(&content, css_path);
        Self::commit(path, result, config)
    }

    /// [`clear_theme`](Self::clear_theme) on a file.
    ///
    /// # Errors
    /// `EditError::Io` when the file cannot be read or written.
    pub fn clear_theme_in_file<P: AsRef<Path>>(
        &self,
        path: P,
        config: EditConfig,
    ) -> Result<EditResult, EditError> {
        let path = path.as_ref();
        let content = motheme_io::read_text_safe(path, config.max_file_size)?;
        let result = self.clear_theme(&content);
        Self::commit(path, result, config)
    }

    /// [`current_theme`](Self::current_theme) on a file.
    ///
    /// # Errors
    /// `EditError::Io` when the file cannot be read.
    pub fn current_theme_of_file<P: AsRef<Path>>(
        &self,
        path: P,
        config: EditConfig,
    ) -> Result<ThemeLookup, EditError> {
        let content = motheme_io::read_text_safe(path, config.max_file_size)?;
        Ok(self.current_theme(&content))
    }

    fn commit(path: &Path, result: EditResult, config: EditConfig) -> Result<EditResult, EditError> {
        if !config.preview_only && result.outcome.is_modified() {
            motheme_io::write_text(path, &result.modified)?;
        }
        tracing::debug!(
            path = %path.display(),
            outcome = ?result.outcome,
            preview = config.preview_only,
            "edited notebook"
        );
        Ok(result)
    }
}
