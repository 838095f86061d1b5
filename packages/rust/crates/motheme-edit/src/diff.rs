//! Diff generation for `--dry-run` previews.

use similar::TextDiff;

/// Context lines shown around each change.
const CONTEXT_RADIUS: usize = 3;

/// Generate a unified diff between two strings.
///
/// Returns an empty string when the inputs are equal.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    generate_labeled_diff("original", "modified", original, modified)
}

/// Unified diff with `---` / `+++` headers naming both sides.
#[must_use]
pub fn generate_labeled_diff(
    old_label: &str,
    new_label: &str,
    original: &str,
    modified: &str,
) -> String {
    if original == modified {
        return String::new();
    }

    TextDiff::from_lines(original, modified)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .missing_newline_hint(false)
        .header(old_label, new_label)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_header() {
        let diff = generate_labeled_diff("a/nb.py", "b/nb.py", "x\n", "y\n");
        assert!(diff.starts_with("--- a/nb.py\n+++ b/nb.py\n"));
    }

    #[test]
    fn test_equal_inputs_produce_nothing() {
        assert!(generate_unified_diff("same\n", "same\n").is_empty());
    }
}
