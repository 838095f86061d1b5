//! Tests for store module - listing, resolving, creating and removing themes.

use tempfile::TempDir;

use motheme_themes::{ThemeError, ThemeStore};

fn store_with(themes: &[&str]) -> (TempDir, ThemeStore) {
    let dir = TempDir::new().expect("Create temp dir");
    let store = ThemeStore::open(dir.path().join("themes")).expect("Open store");
    for name in themes {
        store
            .save(name, &format!("/* {name} */\n"))
            .expect("Save theme");
    }
    (dir, store)
}

#[test]
fn test_open_creates_directory() {
    let (_dir, store) = store_with(&[]);
    assert!(store.dir().is_dir());
    assert!(store.list().expect("List").is_empty());
}

#[test]
fn test_list_is_sorted_and_css_only() {
    let (_dir, store) = store_with(&["wigwam", "coffee", "nord"]);
    std::fs::write(store.dir().join("notes.txt"), "x").expect("Write stray file");

    assert_eq!(store.list().expect("List"), vec!["coffee", "nord", "wigwam"]);
}

#[test]
fn test_resolve_existing_and_missing() {
    let (_dir, store) = store_with(&["coffee"]);

    let path = store.resolve("coffee").expect("Resolve coffee");
    assert!(path.ends_with("coffee.css"));

    match store.resolve("missing") {
        Err(ThemeError::NotFound { name, available, .. }) => {
            assert_eq!(name, "missing");
            assert_eq!(available, vec!["coffee"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_create_copies_reference() {
    let (_dir, store) = store_with(&["coffee"]);

    let created = store.create("coffee", "latte").expect("Create theme");

    assert_eq!(
        std::fs::read_to_string(created).expect("Read created"),
        "/* coffee */\n"
    );
    assert!(store.contains("latte"));
}

#[test]
fn test_create_refuses_existing_target() {
    let (_dir, store) = store_with(&["coffee", "latte"]);
    assert!(matches!(
        store.create("coffee", "latte"),
        Err(ThemeError::AlreadyExists(name)) if name == "latte"
    ));
}

#[test]
fn test_create_requires_reference() {
    let (_dir, store) = store_with(&[]);
    assert!(matches!(
        store.create("ghost", "latte"),
        Err(ThemeError::NotFound { .. })
    ));
}

#[test]
fn test_plan_and_remove() {
    let (_dir, store) = store_with(&["coffee", "nord"]);

    let plan = store.plan_removal(&["nord", "ghost"]);
    assert_eq!(plan.existing, vec!["nord"]);
    assert_eq!(plan.missing, vec!["ghost"]);

    let removed = store.remove(&plan).expect("Remove");
    assert_eq!(removed, vec!["nord"]);
    assert_eq!(store.list().expect("List"), vec!["coffee"]);
}

#[test]
fn test_plan_with_nothing_to_remove() {
    let (_dir, store) = store_with(&[]);
    assert!(store.plan_removal(&["ghost"]).is_empty());
}
