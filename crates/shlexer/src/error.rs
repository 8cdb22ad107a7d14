// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use std::io;

use thiserror::Error;

use crate::location::Location;

/// Lexer errors.
///
/// Every error is fatal to the call that raised it: the partially built token
/// is discarded and the state machine returns to its start state. Use
/// [`LexError::diagnostic`] to render the message with its error leader.
///
/// # Examples
///
/// ```ignore
/// use shlexer::{split, LexError};
///
/// let err = split("echo 'unterminated", false, true).unwrap_err();
/// assert!(matches!(err, LexError::UnterminatedQuote { quote: '\'', .. }));
///
/// let err = split("echo trailing\\", false, true).unwrap_err();
/// assert!(matches!(err, LexError::UnterminatedEscape { .. }));
/// ```
#[derive(Debug, Error)]
pub enum LexError {
    /// End of input inside a quoted string.
    #[error("no closing quotation")]
    UnterminatedQuote {
        /// The quote character that was left open.
        quote: char,
        /// Where the input ended.
        location: Location,
    },

    /// End of input right after an escape character.
    #[error("no escaped character")]
    UnterminatedEscape {
        /// Where the input ended.
        location: Location,
    },

    /// An included file could not be opened.
    #[error("cannot include {path}: {source}")]
    Inclusion {
        /// The file name as requested by the inclusion directive.
        path: String,
        /// Location of the inclusion directive.
        location: Location,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Including one more file would exceed the configured nesting limit.
    #[error("inclusion nested deeper than {limit} levels")]
    IncludeDepth {
        /// The configured limit.
        limit: usize,
        /// Location of the inclusion directive.
        location: Location,
    },

    /// Reading from the active character source failed.
    #[error("read error: {source}")]
    Io {
        /// Where the read was attempted.
        location: Location,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A lexer configuration could not be parsed.
    #[error("invalid lexer config: {0}")]
    Config(String),
}

impl LexError {
    /// Get the location associated with this error, if any.
    pub fn location(&self) -> Option<&Location> {
        match self {
            LexError::UnterminatedQuote { location, .. }
            | LexError::UnterminatedEscape { location }
            | LexError::Inclusion { location, .. }
            | LexError::IncludeDepth { location, .. }
            | LexError::Io { location, .. } => Some(location),
            LexError::Config(_) => None,
        }
    }

    /// Render the message prefixed with its error leader, when it has one.
    ///
    /// ```text
    /// "build.conf", line 3: no closing quotation
    /// ```
    pub fn diagnostic(&self) -> String {
        match self.location() {
            Some(location) => format!("{location}{self}"),
            None => self.to_string(),
        }
    }
}
