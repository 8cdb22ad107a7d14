// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for lexer diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name shown in diagnostics when a source has no file name.
pub const UNNAMED_SOURCE: &str = "<input>";

/// A position in the input: the name of the source being read and the
/// 1-based line number within it.
///
/// Lines are counted per source. Entering an included file starts again at
/// line 1, and returning from it restores the enclosing file's line.
///
/// # Examples
///
/// ```ignore
/// use shlexer::Location;
///
/// let loc = Location::new(Some("build.conf".into()), 3);
/// assert_eq!(loc.to_string(), "\"build.conf\", line 3: ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Name of the source, if it has one.
    pub infile: Option<String>,
    /// 1-based line number.
    pub line: usize,
}

impl Location {
    /// Create a location from a source name and line number.
    #[inline]
    pub fn new(infile: Option<String>, line: usize) -> Self {
        Self { infile, line }
    }

    /// Returns the source name, or [`UNNAMED_SOURCE`] for unnamed sources.
    #[inline]
    pub fn display_name(&self) -> &str {
        self.infile.as_deref().unwrap_or(UNNAMED_SOURCE)
    }
}

/// Formats as an error leader, e.g. `"build.conf", line 3: `.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\", line {}: ", self.display_name(), self.line)
    }
}

/// Build a C-compiler-style error leader: `"<file>", line <n>: `.
///
/// The leader is meant to be prefixed to a message so that editors can jump
/// to the offending line.
///
/// # Example
///
/// ```ignore
/// use shlexer::error_leader;
///
/// assert_eq!(error_leader(Some("a.conf"), 12), "\"a.conf\", line 12: ");
/// assert_eq!(error_leader(None, 1), "\"<input>\", line 1: ");
/// ```
pub fn error_leader(infile: Option<&str>, line: usize) -> String {
    format!("\"{}\", line {}: ", infile.unwrap_or(UNNAMED_SOURCE), line)
}

/// Show a numbered line of `text` with a gutter, for richer diagnostics.
///
/// Returns `None` when `line` is out of range.
///
/// ```text
///   3 | echo "unterminated
/// ```
pub fn line_context(text: &str, line: usize) -> Option<String> {
    let content = text.lines().nth(line.checked_sub(1)?)?;
    Some(format!("{:>3} | {}", line, content))
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
