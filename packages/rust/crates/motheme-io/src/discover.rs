//! Expand CLI inputs into the list of notebooks to process.
//!
//! Directory walking goes through the `ignore` crate (ripgrep's walker), so
//! hidden directories and `.gitignore` rules are honored. User-supplied
//! ignore globs are compiled once into a `GlobSet`.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::classify::is_marimo_file;
use crate::error::IoError;

/// Compiled user ignore patterns (e.g. `**/drafts/**`).
#[derive(Debug, Clone)]
pub struct IgnoreList {
    set: GlobSet,
    len: usize,
}

impl IgnoreList {
    /// An ignore list that matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            len: 0,
        }
    }

    /// Compile glob patterns.
    ///
    /// # Errors
    /// `IoError::InvalidPattern` for the first glob that fails to parse.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, IoError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|e| IoError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| IoError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
            message: e.to_string(),
        })?;
        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    /// Number of patterns compiled into this list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no patterns were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `path` matches any pattern.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.len > 0 && self.set.is_match(path)
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::empty()
    }
}

/// Expand file paths, optionally recursing into directories.
///
/// Only marimo notebooks survive. Without `recursive`, directories given as
/// inputs are dropped; with it, each directory is walked for `*.py` files
/// and the results are sorted per input.
#[must_use]
pub fn expand_files(inputs: &[PathBuf], recursive: bool, ignore: &IgnoreList) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if ignore.is_ignored(input) {
            tracing::debug!(path = %input.display(), "ignored input");
            continue;
        }

        if recursive && input.is_dir() {
            let mut found = walk_notebooks(input, ignore);
            found.sort();
            files.extend(found);
        } else if is_marimo_file(input) {
            files.push(input.clone());
        } else {
            tracing::debug!(path = %input.display(), "skipping non-notebook input");
        }
    }

    files
}

fn walk_notebooks(root: &Path, ignore: &IgnoreList) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .build()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(root = %root.display(), error = %error, "walk error");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .filter(|path| !ignore.is_ignored(path))
        .filter(|path| is_marimo_file(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ignore_list_matches_nothing() {
        let list = IgnoreList::empty();
        assert!(list.is_empty());
        assert!(!list.is_ignored(Path::new("anything.py")));
    }

    #[test]
    fn test_ignore_list_matches_glob() {
        let list = IgnoreList::new(&["**/drafts/**"]).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.is_ignored(Path::new("notes/drafts/nb.py")));
        assert!(!list.is_ignored(Path::new("notes/final/nb.py")));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = IgnoreList::new(&["a[b"]);
        assert!(matches!(result, Err(IoError::InvalidPattern { .. })));
    }
}
