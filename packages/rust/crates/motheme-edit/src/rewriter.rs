//! Block Rewriter.

use crate::types::Block;

/// Replace the lines spanned by `block` with a single `replacement` line.
///
/// Lines before `start_line` and after `end_line` are copied unchanged.
/// `block` must come from [`locate`](crate::locate) on this same `lines`;
/// a block from another version of the file produces a silently wrong
/// splice. Out-of-range bounds are clamped to `lines`.
#[must_use]
pub fn rewrite<S: AsRef<str>>(
    lines: &[S],
    block: &Block,
    replacement: impl Into<String>,
) -> Vec<String> {
    let start = block.start_line.min(lines.len());
    let end = block.end_line.saturating_add(1).clamp(start, lines.len());
    let before = &lines[..start];
    let after = &lines[end..];

    let mut out = Vec::with_capacity(before.len() + 1 + after.len());
    out.extend(before.iter().map(|l| l.as_ref().to_string()));
    out.push(replacement.into());
    out.extend(after.iter().map(|l| l.as_ref().to_string()));
    out
}
