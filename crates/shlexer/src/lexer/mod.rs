// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style lexer: state machine, pushback queues and source stack.

mod include;
mod read;

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::path::Path;

use crate::config::{CharClasses, LexerConfig};
use crate::error::LexError;
use crate::location::{error_leader, Location};
use crate::source::{CharSource, FileSource, TextSource};
use crate::stack::SourceStack;

pub use include::{resolve_include_path, Included, IncludeHook};

/// Classification state of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between tokens.
    Start,
    /// Inside a word.
    InWord,
    /// Inside a run of punctuation characters.
    InPunctuation,
    /// Inside a quoted string opened by the given quote character.
    InQuote(char),
    /// Right after the given escape character.
    InEscape(char),
    /// The active source is exhausted.
    Eof,
}

/// Shell-style lexer.
///
/// The lexer pulls characters from a [`CharSource`] and groups them into
/// tokens following shell quoting, escaping and comment rules. It supports:
///
/// - **POSIX mode**: backslash escapes, quote removal, `""` as an empty token
/// - **Non-POSIX mode**: quotes are kept in the token text
/// - **Punctuation mode**: runs of `();<>|&` become their own tokens
/// - **Whitespace split**: only whitespace separates words
/// - **Inclusion**: `source FILE` splices in the tokens of `FILE`
///
/// # Examples
///
/// ```ignore
/// use shlexer::{Lexer, LexerConfig};
///
/// let mut lexer = Lexer::from_text("ls -l 'my file'", LexerConfig::default().whitespace_split(true));
/// assert_eq!(lexer.get_token()?, Some("ls".to_string()));
/// assert_eq!(lexer.get_token()?, Some("-l".to_string()));
/// assert_eq!(lexer.get_token()?, Some("my file".to_string()));
/// assert_eq!(lexer.get_token()?, None);
/// # Ok::<(), shlexer::LexError>(())
/// ```
///
/// ## Lookahead with pushback
///
/// ```ignore
/// use shlexer::{Lexer, LexerConfig};
///
/// let mut lexer = Lexer::from_text("a b", LexerConfig::default());
/// let tok = lexer.get_token()?.unwrap_or_default();
/// lexer.push_token(tok);
/// assert_eq!(lexer.get_token()?, Some("a".to_string()));
/// # Ok::<(), shlexer::LexError>(())
/// ```
pub struct Lexer {
    config: LexerConfig,
    classes: CharClasses,
    /// Name of the active source.
    infile: Option<String>,
    /// The active source.
    source: Box<dyn CharSource>,
    /// Current line of the active source (1-based).
    lineno: usize,
    state: State,
    /// Token being accumulated; empty between calls.
    token: String,
    /// Tokens to return before reading more input. Front is returned first.
    pushback: VecDeque<String>,
    /// Characters read past the end of a punctuation run.
    pushback_chars: VecDeque<char>,
    /// Suspended sources.
    stack: SourceStack,
    include_hook: IncludeHook,
}

impl Lexer {
    /// Create a lexer over `source`.
    ///
    /// `infile` names the source in diagnostics and anchors relative
    /// inclusion paths.
    pub fn new(source: Box<dyn CharSource>, infile: Option<String>, config: LexerConfig) -> Self {
        let classes = CharClasses::new(&config);
        Self {
            config,
            classes,
            infile,
            source,
            lineno: 1,
            state: State::Start,
            token: String::new(),
            pushback: VecDeque::new(),
            pushback_chars: VecDeque::new(),
            stack: SourceStack::new(),
            include_hook: Box::new(include::open_included),
        }
    }

    /// Create a lexer over in-memory text.
    pub fn from_text(text: impl Into<String>, config: LexerConfig) -> Self {
        Self::new(Box::new(TextSource::new(text)), None, config)
    }

    /// Create a lexer over a file, named after its path.
    pub fn open(path: impl AsRef<Path>, config: LexerConfig) -> io::Result<Self> {
        let path = path.as_ref();
        let source = FileSource::open(path)?;
        Ok(Self::new(
            Box::new(source),
            Some(path.display().to_string()),
            config,
        ))
    }

    /// Replace the hook used to open included files.
    ///
    /// The hook receives the file name token and the name of the including
    /// source. Returning `Ok(None)` skips the inclusion.
    pub fn with_include_hook(mut self, hook: IncludeHook) -> Self {
        self.include_hook = hook;
        self
    }

    /// Get the next token, or `None` at the end of all input.
    ///
    /// Pushed-back tokens are returned first. Inclusion directives are
    /// followed, and an exhausted included source is popped so reading
    /// resumes in the enclosing one.
    pub fn get_token(&mut self) -> Result<Option<String>, LexError> {
        loop {
            if let Some(tok) = self.pushback.pop_front() {
                tracing::debug!(token = %tok, "popping pushed-back token");
                return Ok(Some(tok));
            }

            match self.read_token()? {
                Some(raw) if self.is_source_keyword(&raw) => self.include_next()?,
                Some(raw) => {
                    tracing::debug!(token = %raw, line = self.lineno, "token");
                    return Ok(Some(raw));
                }
                None => {
                    if !self.pop_source() {
                        tracing::debug!("token=EOF");
                        return Ok(None);
                    }
                }
            }
        }
    }

    /// Push a token to be returned by the next [`get_token`](Self::get_token).
    ///
    /// The most recently pushed token comes back first.
    pub fn push_token(&mut self, tok: impl Into<String>) {
        let tok = tok.into();
        tracing::debug!(token = %tok, "pushing token");
        self.pushback.push_front(tok);
    }

    /// Build an error leader for the current position, e.g.
    /// `"build.conf", line 3: `. Either part can be overridden.
    pub fn error_leader(&self, infile: Option<&str>, lineno: Option<usize>) -> String {
        error_leader(
            infile.or(self.infile.as_deref()),
            lineno.unwrap_or(self.lineno),
        )
    }

    /// Current position in the active source.
    pub fn location(&self) -> Location {
        Location::new(self.infile.clone(), self.lineno)
    }

    /// Current line of the active source (1-based).
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Name of the active source.
    pub fn infile(&self) -> Option<&str> {
        self.infile.as_deref()
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of suspended sources.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn is_source_keyword(&self, raw: &str) -> bool {
        self.config.source_keyword.as_deref() == Some(raw)
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("infile", &self.infile)
            .field("lineno", &self.lineno)
            .field("state", &self.state)
            .field("pushback", &self.pushback)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Yields tokens until the end of all input.
impl Iterator for Lexer {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_token().transpose()
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
