//! Tests for diff module - unified diff generation.

use motheme_edit::diff::{generate_labeled_diff, generate_unified_diff};

#[test]
fn test_simple_diff() {
    let old = "import marimo\napp = marimo.App()\n";
    let new = "import marimo\napp = marimo.App(css_file=\"dark.css\")\n";

    let diff = generate_unified_diff(old, new);

    assert!(diff.contains("-app = marimo.App()"));
    assert!(diff.contains("+app = marimo.App(css_file=\"dark.css\")"));
    assert!(diff.contains(" import marimo"));
}

#[test]
fn test_no_changes() {
    let content = "same content\n";
    assert!(generate_unified_diff(content, content).is_empty());
}

#[test]
fn test_collapsed_block_shows_every_removed_line() {
    let old = "app = marimo.App(\n    width=\"full\",\n)\n";
    let new = "app = marimo.App(css_file=\"dark.css\", width=\"full\",)\n";

    let diff = generate_labeled_diff("nb.py", "nb.py", old, new);

    assert!(diff.contains("-    width=\"full\",\n"));
    assert!(diff.contains("-)\n"));
    assert!(diff.contains("@@"));
}
