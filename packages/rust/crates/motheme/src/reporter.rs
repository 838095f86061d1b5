//! User-facing output.
//!
//! Progress lines go through [`Reporter::say`] and disappear under `--quiet`;
//! usage errors and prompts use [`Reporter::always`] / [`Reporter::prompt`].
//! Diagnostics belong in `tracing`, not here.

use std::fmt::Display;
use std::io::Write;

/// Line-oriented writer for messages meant for the user.
pub struct Reporter<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> Reporter<W> {
    /// Reporter writing to `out`; `quiet` silences [`say`](Self::say).
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    /// True under `--quiet`.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a line unless quiet.
    pub fn say(&mut self, line: impl Display) {
        if !self.quiet {
            self.always(line);
        }
    }

    /// Print a line regardless of quiet mode.
    pub fn always(&mut self, line: impl Display) {
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::debug!(error = %error, "stdout write failed");
        }
    }

    /// Print without a newline and flush, for interactive questions.
    pub fn prompt(&mut self, text: impl Display) {
        let written = write!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(error) = written {
            tracing::debug!(error = %error, "stdout write failed");
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
