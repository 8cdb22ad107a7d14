// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character sources: where the lexer pulls its input from.
//!
//! The lexer only depends on the [`CharSource`] trait. Two providers ship
//! with the crate:
//!
//! - [`TextSource`]: a fixed in-memory string
//! - [`FileSource`]: a buffered file, decoded one line at a time

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A sequence of characters with a known end, read with peek-and-advance.
///
/// `Ok(None)` signals end of input. Implementations must keep returning
/// `Ok(None)` once exhausted or closed.
pub trait CharSource: fmt::Debug {
    /// Return the next character without consuming it.
    fn peek(&mut self) -> io::Result<Option<char>>;

    /// Consume and return the next character.
    fn next_char(&mut self) -> io::Result<Option<char>>;

    /// Discard everything up to and including the next newline.
    fn skip_line(&mut self) -> io::Result<()> {
        while let Some(c) = self.next_char()? {
            if c == '\n' {
                break;
            }
        }
        Ok(())
    }

    /// Release the underlying resource. Safe to call more than once.
    fn close(&mut self) {}

    /// Short human-readable label, used in debug traces.
    fn describe(&self) -> String;
}

/// In-memory text.
///
/// # Examples
///
/// ```ignore
/// use shlexer::{CharSource, TextSource};
///
/// let mut src = TextSource::new("ab");
/// assert_eq!(src.peek()?, Some('a'));
/// assert_eq!(src.next_char()?, Some('a'));
/// assert_eq!(src.next_char()?, Some('b'));
/// assert_eq!(src.next_char()?, None);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
    /// Byte offset of the next character.
    pos: usize,
}

impl TextSource {
    /// Create a source over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }

    /// The text not yet consumed.
    pub fn remaining(&self) -> &str {
        self.text.get(self.pos..).unwrap_or("")
    }
}

impl CharSource for TextSource {
    fn peek(&mut self) -> io::Result<Option<char>> {
        Ok(self.remaining().chars().next())
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        let next = self.remaining().chars().next();
        if let Some(c) = next {
            self.pos += c.len_utf8();
        }
        Ok(next)
    }

    fn skip_line(&mut self) -> io::Result<()> {
        self.pos = match self.remaining().find('\n') {
            Some(i) => self.pos + i + 1,
            None => self.text.len(),
        };
        Ok(())
    }

    fn close(&mut self) {
        self.text = String::new();
        self.pos = 0;
    }

    fn describe(&self) -> String {
        format!("<text, {} bytes>", self.text.len())
    }
}

/// A file read through a buffer, one line at a time.
///
/// The file handle is held until [`CharSource::close`] is called (or the
/// source is dropped). Reads after `close` report end of input.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    /// Current line, including its trailing newline.
    line: String,
    /// Byte offset into `line`.
    pos: usize,
}

impl FileSource {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        tracing::debug!(path = %path.display(), "opened file source");
        Ok(Self {
            path,
            reader: Some(BufReader::new(file)),
            line: String::new(),
            pos: 0,
        })
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file handle has been released.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Make sure `line[pos..]` is non-empty, refilling from the file.
    ///
    /// Returns false at end of file or after close.
    fn fill(&mut self) -> io::Result<bool> {
        while self.pos >= self.line.len() {
            let Some(reader) = self.reader.as_mut() else {
                return Ok(false);
            };
            self.line.clear();
            self.pos = 0;
            if reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn current(&self) -> Option<char> {
        self.line.get(self.pos..).and_then(|rest| rest.chars().next())
    }
}

impl CharSource for FileSource {
    fn peek(&mut self) -> io::Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.current())
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        let next = self.peek()?;
        if let Some(c) = next {
            self.pos += c.len_utf8();
        }
        Ok(next)
    }

    fn skip_line(&mut self) -> io::Result<()> {
        // A buffered line always ends at a newline (or end of file), so
        // dropping the rest of it skips exactly one line.
        if self.fill()? {
            self.pos = self.line.len();
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.reader.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file source");
        }
        self.line.clear();
        self.pos = 0;
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
