//! Terminator-preserving line handling.
//!
//! `split_lines(text).concat() == text` always holds, which is what keeps
//! untouched lines byte-identical on write-back.

/// Split text into lines, each keeping its `\n` / `\r\n` terminator.
///
/// The last line has no terminator when the text does not end in one.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// The terminator at the end of `line`: `"\r\n"`, `"\n"` or `""`.
#[must_use]
pub fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// `line` without its terminator.
#[must_use]
pub fn line_body(line: &str) -> &str {
    &line[..line.len() - line_terminator(line).len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_round_trips() {
        let text = "a\r\nb\n\nc";
        let lines = split_lines(text);
        assert_eq!(lines, vec!["a\r\n", "b\n", "\n", "c"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_terminators() {
        assert_eq!(line_terminator("x\r\n"), "\r\n");
        assert_eq!(line_terminator("x\n"), "\n");
        assert_eq!(line_terminator("x"), "");
        assert_eq!(line_body("x\r\n"), "x");
        assert_eq!(line_body("\n"), "");
    }
}
