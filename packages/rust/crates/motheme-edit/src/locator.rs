//! Block Locator.
//!
//! Scans lines for the first occurrence of a marker and follows the running
//! parenthesis balance until it returns to zero. Only the aggregate depth
//! matters, so a single counter stands in for a stack.

use crate::types::Block;

/// Find the first invocation opened by `marker`.
///
/// The first line is kept verbatim in `content`; continuation lines are
/// trimmed before being appended. Returns `None` when the marker never
/// appears or the parentheses never rebalance before the end of input.
///
/// # Example
///
/// ```rust
/// use motheme_edit::locate;
///
/// let lines = ["app = marimo.App(", "    width=800,", "    height=600", ")"];
/// let block = locate(&lines, "app = marimo.App(").unwrap();
/// assert_eq!((block.start_line, block.end_line), (0, 3));
/// assert_eq!(block.content, "app = marimo.App(width=800,height=600)");
/// ```
#[must_use]
pub fn locate<S: AsRef<str>>(lines: &[S], marker: &str) -> Option<Block> {
    let mut start_line = None;
    let mut balance: i64 = 0;
    let mut content = String::new();

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        let Some(start) = start_line else {
            if line.contains(marker) {
                start_line = Some(idx);
                balance = paren_delta(line);
                content.push_str(line);
                if balance == 0 {
                    return Some(Block {
                        start_line: idx,
                        end_line: idx,
                        content,
                    });
                }
            }
            continue;
        };

        balance += paren_delta(line);
        content.push_str(line.trim());

        if balance == 0 {
            return Some(Block {
                start_line: start,
                end_line: idx,
                content,
            });
        }
    }

    if let Some(start) = start_line {
        tracing::debug!(start_line = start, balance, "block never closed");
    }
    None
}

/// `(` count minus `)` count.
fn paren_delta(line: &str) -> i64 {
    line.bytes().fold(0, |acc, b| match b {
        b'(' => acc + 1,
        b')' => acc - 1,
        _ => acc,
    })
}
