//! Tests for batch module - sequential processing across notebooks.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use motheme_edit::{
    BatchOperation, EditConfig, FileStatus, NotebookEditor, ThemeLookup, process_files,
};

fn write(path: &Path, content: &str) {
    File::create(path)
        .expect("Create file")
        .write_all(content.as_bytes())
        .expect("Write content");
}

#[test]
fn test_batch_apply() {
    let dir = TempDir::new().expect("Create temp dir");
    let file1 = dir.path().join("one.py");
    let file2 = dir.path().join("two.py");
    write(&file1, "import marimo\napp = marimo.App()\n");
    write(&file2, "import marimo\napp = marimo.App(\n    width=\"full\",\n)\n");

    let report = process_files(
        &NotebookEditor::default(),
        &[&file1, &file2],
        &BatchOperation::Apply {
            css_path: "/themes/dark.css".to_string(),
        },
        EditConfig::default(),
    );

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.files_changed(), 2);
    assert!(!report.has_errors());

    let modified1 = std::fs::read_to_string(&file1).expect("Read modified1");
    let modified2 = std::fs::read_to_string(&file2).expect("Read modified2");
    assert_eq!(
        modified1,
        "import marimo\napp = marimo.App(css_file=\"/themes/dark.css\")\n"
    );
    assert_eq!(
        modified2,
        "import marimo\napp = marimo.App(css_file=\"/themes/dark.css\", width=\"full\",)\n"
    );
}

#[test]
fn test_batch_continues_after_error() {
    let dir = TempDir::new().expect("Create temp dir");
    let missing = dir.path().join("missing.py");
    let good = dir.path().join("good.py");
    write(&good, "app = marimo.App(css_file=\"a.css\")\n");

    let report = process_files(
        &NotebookEditor::default(),
        &[&missing, &good],
        &BatchOperation::Clear,
        EditConfig::default(),
    );

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].0, missing);
    assert_eq!(report.modified_files, vec![good.clone()]);
    assert_eq!(
        std::fs::read_to_string(&good).expect("Read good"),
        "app = marimo.App()\n"
    );
}

#[test]
fn test_batch_clear_without_theme_is_not_modified() {
    let dir = TempDir::new().expect("Create temp dir");
    let file = dir.path().join("plain.py");
    write(&file, "app = marimo.App(width=800)\n");

    let report = process_files(
        &NotebookEditor::default(),
        &[&file],
        &BatchOperation::Clear,
        EditConfig::default(),
    );

    assert_eq!(report.files_changed(), 0);
    assert!(report.missing_block.is_empty());
}

#[test]
fn test_batch_inspect() {
    let dir = TempDir::new().expect("Create temp dir");
    let themed = dir.path().join("themed.py");
    let bare = dir.path().join("bare.py");
    write(&themed, "app = marimo.App(css_file='themes/coffee.css')\n");
    write(&bare, "print('no app here')\n");

    let files: Vec<PathBuf> = vec![themed, bare.clone()];
    let report = process_files(
        &NotebookEditor::default(),
        &files,
        &BatchOperation::Inspect,
        EditConfig::default(),
    );

    assert_eq!(report.missing_block, vec![bare]);
    match &report.entries[0].1 {
        FileStatus::Inspected(ThemeLookup::Theme(name)) => assert_eq!(name, "coffee"),
        other => panic!("unexpected status: {other:?}"),
    }
}
