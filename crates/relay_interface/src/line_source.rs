//! Console input seam.

use relay_error::RelayResult;
use std::collections::VecDeque;
use std::io::BufRead;

/// Source of user input lines.
///
/// `Ok(None)` means the input is exhausted.
pub trait LineSource {
    /// Read the next line with its terminator removed.
    fn next_line(&mut self) -> RelayResult<Option<String>>;
}

/// Strip one trailing `\n` or `\r\n`, leaving other whitespace alone.
fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Blocking line reader over any buffered reader, stdin by default.
#[derive(Debug)]
pub struct StdinLines<R = std::io::StdinLock<'static>> {
    reader: R,
}

impl StdinLines {
    /// Reads from the process's standard input.
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin().lock(),
        }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinLines<R> {
    /// Reads from an arbitrary buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinLines<R> {
    fn next_line(&mut self) -> RelayResult<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(strip_terminator(line)))
    }
}

/// Pre-recorded input lines, handed out in order.
///
/// # Examples
///
/// ```
/// use relay_interface::{LineSource, ScriptedLines};
///
/// let mut lines = ScriptedLines::new(["Hello", "goodbye"]);
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("Hello"));
/// assert_eq!(lines.remaining(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    /// Creates a source that yields `lines` and then reports exhaustion.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> RelayResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
