//! Parameter Editor.
//!
//! Works purely on flattened block text (see [`Block`](crate::Block)); it
//! knows nothing about lines. Only `name=<quoted string>` assignments are
//! recognized. Values are not validated.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static DOUBLE_COMMA: LazyLock<Regex> = LazyLock::new(|| compile_regex(r",\s*,"));
static OPEN_COMMA: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\(\s*,\s*"));
static CLOSE_COMMA: LazyLock<Regex> = LazyLock::new(|| compile_regex(r",\s*\)"));

fn compile_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex {pattern}: {err}"))
}

/// `name` as a whole-word key followed by `=`, surrounding spaces allowed.
fn key_pattern(name: &str) -> String {
    let boundary = if name.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        ""
    };
    format!(r"{boundary}{}\s*=\s*", regex::escape(name))
}

/// Matches `name="..."` or `name='...'`.
///
/// Group `key` is the `name=` prefix with its original spacing, `dq` / `sq`
/// hold the value for double / single quotes.
fn assignment_regex(name: &str) -> Regex {
    compile_regex(&format!(
        r#"(?P<key>{})(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#,
        key_pattern(name)
    ))
}

/// `name=` with any value, excluding `name==`.
fn bare_assignment_regex(name: &str) -> Regex {
    compile_regex(&format!(r"{}(?:[^=]|$)", key_pattern(name)))
}

/// Prefer `preferred`, unless the value contains it and the other quote is free.
fn pick_quote(preferred: char, value: &str) -> char {
    let other = if preferred == '"' { '\'' } else { '"' };
    if value.contains(preferred) && !value.contains(other) {
        other
    } else {
        preferred
    }
}

/// Offset of the `(` that opens the call closing at the last `)`.
///
/// Falls back to the first `(` when the content has no balanced call.
fn call_open_paren(content: &str) -> Option<usize> {
    let matched = content.rfind(')').and_then(|close| {
        let mut depth = 0i64;
        for (idx, byte) in content.as_bytes()[..=close].iter().enumerate().rev() {
            match byte {
                b')' => depth += 1,
                b'(' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(idx);
                    }
                }
                _ => {}
            }
        }
        None
    });
    matched.or_else(|| content.find('('))
}

/// Current quoted value of `name`, if any.
///
/// ```rust
/// use motheme_edit::quoted_param;
///
/// let content = "app = marimo.App(css_file='themes/dark.css')";
/// assert_eq!(quoted_param(content, "css_file").as_deref(), Some("themes/dark.css"));
/// ```
#[must_use]
pub fn quoted_param(content: &str, name: &str) -> Option<String> {
    let caps = assignment_regex(name).captures(content)?;
    caps.name("dq")
        .or_else(|| caps.name("sq"))
        .map(|m| m.as_str().to_string())
}

/// Insert or update `name="value"`.
///
/// An existing quoted assignment keeps its quote character and spacing.
/// Otherwise the parameter becomes the first argument of the call that
/// closes at the last `)` of `content`. An existing unquoted `name=...`, or
/// a value holding both quote characters, leaves `content` alone.
#[must_use]
pub fn set_param(content: &str, name: &str, value: &str) -> String {
    if value.contains('"') && value.contains('\'') {
        tracing::debug!(name, value, "value cannot be quoted; leaving it");
        return content.to_string();
    }

    let assignment = assignment_regex(name);
    if assignment.is_match(content) {
        return assignment
            .replace_all(content, |caps: &Captures<'_>| {
                let preferred = if caps.name("sq").is_some() { '\'' } else { '"' };
                let quote = pick_quote(preferred, value);
                format!("{}{quote}{value}{quote}", &caps["key"])
            })
            .into_owned();
    }

    if bare_assignment_regex(name).is_match(content) {
        tracing::debug!(name, "parameter has a non-string value; leaving it");
        return content.to_string();
    }

    let Some(open) = call_open_paren(content) else {
        return content.to_string();
    };
    let (head, rest) = content.split_at(open + 1);
    let quote = pick_quote('"', value);
    let param = format!("{name}={quote}{value}{quote}");

    let args = rest.trim_start();
    if args.starts_with(')') {
        format!("{head}{param}{args}")
    } else {
        format!("{head}{param}, {rest}")
    }
}

/// Remove `name=<quoted>` and tidy the commas left behind.
///
/// Returns `content` unchanged when the parameter is absent.
#[must_use]
pub fn remove_param(content: &str, name: &str) -> String {
    let assignment = compile_regex(&format!(
        r#",?\s*{}(?:"[^"]*"|'[^']*')"#,
        key_pattern(name)
    ));
    if !assignment.is_match(content) {
        return content.to_string();
    }

    let removed = assignment.replace_all(content, "");
    let collapsed = DOUBLE_COMMA.replace_all(&removed, ",");
    let opened = OPEN_COMMA.replace_all(&collapsed, "(");
    CLOSE_COMMA.replace_all(&opened, ")").into_owned()
}

/// A single edit to apply to flattened block text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterEdit {
    /// Insert or update `name="value"`.
    Set {
        /// Parameter name.
        name: String,
        /// Unquoted value.
        value: String,
    },
    /// Remove `name=...`.
    Remove {
        /// Parameter name.
        name: String,
    },
}

impl ParameterEdit {
    /// Build a `Set` edit.
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a `Remove` edit.
    pub fn remove(name: impl Into<String>) -> Self {
        Self::Remove { name: name.into() }
    }

    /// Name of the parameter this edit targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. } | Self::Remove { name } => name,
        }
    }

    /// Apply to flattened block text.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        match self {
            Self::Set { name, value } => set_param(content, name, value),
            Self::Remove { name } => remove_param(content, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_whole_word() {
        let content = r#"app = marimo.App(my_css_file="a.css")"#;
        assert_eq!(quoted_param(content, "css_file"), None);
        assert_eq!(remove_param(content, "css_file"), content);
    }

    #[test]
    fn test_pick_quote() {
        assert_eq!(pick_quote('"', "plain"), '"');
        assert_eq!(pick_quote('"', r#"a"b"#), '\'');
        assert_eq!(pick_quote('\'', "it's"), '"');
    }

    #[test]
    fn test_bare_assignment_ignores_comparison() {
        assert!(bare_assignment_regex("css_file").is_match("f(css_file=path)"));
        assert!(!bare_assignment_regex("css_file").is_match("f(css_file == x)"));
    }

    #[test]
    fn test_call_open_paren_skips_prefix_calls() {
        assert_eq!(call_open_paren("print(1); app = App(f(x))"), Some(19));
        assert_eq!(call_open_paren("app = App("), Some(9));
        assert_eq!(call_open_paren("no call"), None);
    }

    #[test]
    fn test_edit_name() {
        assert_eq!(ParameterEdit::set("css_file", "a").name(), "css_file");
        assert_eq!(ParameterEdit::remove("css_file").name(), "css_file");
    }
}
