//! Core types for block editing.

/// A located invocation.
///
/// `content` is the first participating line as-is followed by every later
/// participating line with surrounding whitespace stripped. A `Block` holds
/// no reference to the lines it came from; it is only meaningful for the
/// exact line sequence passed to [`locate`](crate::locate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// First line of the invocation (0-indexed).
    pub start_line: usize,
    /// Last line of the invocation, inclusive.
    pub end_line: usize,
    /// Flattened single-line text of the invocation.
    pub content: String,
}

impl Block {
    /// Number of source lines the block spans.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// True when the invocation sits on one line.
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// What an edit did to a notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The theme parameter was inserted or updated.
    Applied,
    /// The theme parameter was removed.
    Cleared,
    /// The block already had the requested value.
    Unchanged,
    /// Nothing to remove.
    ParameterAbsent,
    /// No `marimo.App(` invocation in the file.
    BlockNotFound,
}

impl EditOutcome {
    /// True when the file content differs after the edit.
    #[must_use]
    pub fn is_modified(self) -> bool {
        matches!(self, Self::Applied | Self::Cleared)
    }
}

/// Result of editing one notebook.
#[derive(Debug, Clone)]
pub struct EditResult {
    /// Original content before modification.
    pub original: String,
    /// Content after the edit (equal to `original` unless modified).
    pub modified: String,
    /// What happened.
    pub outcome: EditOutcome,
    /// Unified diff between `original` and `modified`.
    pub diff: String,
}

impl EditResult {
    pub(crate) fn untouched(original: &str, outcome: EditOutcome) -> Self {
        Self {
            original: original.to_string(),
            modified: original.to_string(),
            outcome,
            diff: String::new(),
        }
    }
}

/// Theme currently referenced by a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeLookup {
    /// Stem of the css file path (`themes/dark.css` -> `dark`).
    Theme(String),
    /// The block has no theme parameter.
    NoTheme,
    /// No `marimo.App(` invocation in the file.
    BlockNotFound,
}

/// Configuration for file-level edits.
#[derive(Debug, Clone, Copy)]
pub struct EditConfig {
    /// Maximum file size in bytes (default 8MB).
    pub max_file_size: u64,
    /// Whether to preview only (no actual file modification).
    pub preview_only: bool,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_file_size: 8 * 1024 * 1024,
            preview_only: false,
        }
    }
}
