//! Tests for params module - set / remove of named parameters.

use motheme_edit::{ParameterEdit, quoted_param, remove_param, set_param};

const NAME: &str = "css_file";

#[test]
fn test_set_inserts_first_argument() {
    let result = set_param("app = marimo.App(width=800)", NAME, "dark.css");
    assert_eq!(result, r#"app = marimo.App(css_file="dark.css", width=800)"#);
}

#[test]
fn test_set_into_empty_call() {
    assert_eq!(
        set_param("app = marimo.App()", NAME, "dark.css"),
        r#"app = marimo.App(css_file="dark.css")"#
    );
    assert_eq!(
        set_param("app = marimo.App(  )", NAME, "dark.css"),
        r#"app = marimo.App(css_file="dark.css")"#
    );
}

#[test]
fn test_set_replaces_existing_value() {
    let content = r#"app = marimo.App(width="full", css_file="old.css")"#;
    assert_eq!(
        set_param(content, NAME, "new.css"),
        r#"app = marimo.App(width="full", css_file="new.css")"#
    );
}

#[test]
fn test_set_keeps_single_quotes() {
    let content = "app = marimo.App(css_file='old.css', width=800)";
    assert_eq!(
        set_param(content, NAME, "new.css"),
        "app = marimo.App(css_file='new.css', width=800)"
    );
}

#[test]
fn test_set_keeps_spacing_around_equals() {
    let content = r#"app = marimo.App(css_file = "old.css")"#;
    assert_eq!(
        set_param(content, NAME, "new.css"),
        r#"app = marimo.App(css_file = "new.css")"#
    );
}

#[test]
fn test_set_leaves_unquoted_value() {
    let content = "app = marimo.App(css_file=THEME_PATH)";
    assert_eq!(set_param(content, NAME, "new.css"), content);
}

#[test]
fn test_set_is_idempotent() {
    let inputs = [
        "app = marimo.App()",
        "app = marimo.App(width=800)",
        r#"app = marimo.App(css_file="a.css")"#,
        "app = marimo.App(layout_file='l.json',width=800,)",
    ];
    let values = ["themes/dark.css", "it's.css", r#"a"b.css"#, r#"a"b'c.css"#];
    for content in inputs {
        for value in values {
            let once = set_param(content, NAME, value);
            let twice = set_param(&once, NAME, value);
            assert_eq!(once, twice, "input: {content}, value: {value}");
        }
    }
}

#[test]
fn test_set_skips_value_with_both_quotes() {
    let content = "app = marimo.App(width=1)";
    assert_eq!(set_param(content, NAME, r#"a"b'c.css"#), content);
}

#[test]
fn test_set_inserts_into_call_after_parenthesised_prefix() {
    assert_eq!(
        set_param("print(1); app = marimo.App(width=1)", NAME, "d.css"),
        r#"print(1); app = marimo.App(css_file="d.css", width=1)"#
    );
    assert_eq!(
        set_param("f(x); app = marimo.App()", NAME, "d.css"),
        r#"f(x); app = marimo.App(css_file="d.css")"#
    );
}

#[test]
fn test_remove_first_argument() {
    let content = r#"app = marimo.App(css_file="dark.css", width=800)"#;
    assert_eq!(remove_param(content, NAME), "app = marimo.App(width=800)");
}

#[test]
fn test_remove_middle_and_last() {
    assert_eq!(
        remove_param(r#"app = marimo.App(a=1, css_file="x.css", b=2)"#, NAME),
        "app = marimo.App(a=1, b=2)"
    );
    assert_eq!(
        remove_param(r#"app = marimo.App(a=1, css_file='x.css')"#, NAME),
        "app = marimo.App(a=1)"
    );
}

#[test]
fn test_remove_sole_argument() {
    assert_eq!(
        remove_param(r#"app = marimo.App(css_file="x.css")"#, NAME),
        "app = marimo.App()"
    );
}

#[test]
fn test_remove_from_flattened_multiline() {
    let content = r#"app = marimo.App(layout_file="l.json",css_file="x.css",)"#;
    assert_eq!(
        remove_param(content, NAME),
        r#"app = marimo.App(layout_file="l.json")"#
    );
}

#[test]
fn test_remove_absent_is_noop() {
    let content = "app = marimo.App(width=800,)";
    assert_eq!(remove_param(content, NAME), content);
}

#[test]
fn test_remove_is_idempotent() {
    let inputs = [
        r#"app = marimo.App(css_file="dark.css", width=800)"#,
        r#"app = marimo.App(a=1,css_file='x.css',)"#,
        "app = marimo.App()",
    ];
    for content in inputs {
        let once = remove_param(content, NAME);
        assert_eq!(remove_param(&once, NAME), once, "input: {content}");
    }
}

#[test]
fn test_remove_after_set_restores_parameters() {
    let inputs = [
        "app = marimo.App()",
        "app = marimo.App(width=800)",
        r#"app = marimo.App(width="full", layout_file="l.json")"#,
    ];
    for content in inputs {
        let round = remove_param(&set_param(content, NAME, "dark.css"), NAME);
        assert_eq!(round, content);
    }
}

#[test]
fn test_quoted_param() {
    let content = r#"app = marimo.App(width=800, css_file="themes/wigwam/wigwam.css")"#;
    assert_eq!(
        quoted_param(content, NAME).as_deref(),
        Some("themes/wigwam/wigwam.css")
    );
    assert_eq!(quoted_param("app = marimo.App()", NAME), None);
}

#[test]
fn test_parameter_edit_apply() {
    let content = "app = marimo.App(width=800)";
    let set = ParameterEdit::set(NAME, "dark.css");
    let remove = ParameterEdit::remove(NAME);

    let themed = set.apply(content);
    assert_eq!(themed, r#"app = marimo.App(css_file="dark.css", width=800)"#);
    assert_eq!(remove.apply(&themed), content);
}
