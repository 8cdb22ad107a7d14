// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer configuration and the character classes derived from it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LexError;

/// Default whitespace characters.
pub const DEFAULT_WHITESPACE: &str = " \t\r\n";
/// Default word characters: ASCII letters, digits and underscore.
pub const DEFAULT_WORD_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";
/// Extra word characters in POSIX mode.
pub const POSIX_WORD_CHARS: &str =
    "ßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ";
/// Extra word characters in punctuation mode (filename-safe symbols).
pub const PUNCTUATION_WORD_CHARS: &str = "~-./*?=";
/// Shell metacharacters emitted as their own tokens in punctuation mode.
pub const DEFAULT_PUNCTUATION_CHARS: &str = "();<>|&";
pub const DEFAULT_QUOTES: &str = "'\"";
pub const DEFAULT_ESCAPE: &str = "\\";
pub const DEFAULT_ESCAPED_QUOTES: &str = "\"";
pub const DEFAULT_COMMENTERS: &str = "#";

/// Configuration for a [`Lexer`](crate::Lexer).
///
/// The default is POSIX mode with every other option off, the same rules
/// [`split`](crate::split) uses minus whitespace splitting. Options are set
/// with builder methods:
///
/// ```ignore
/// use shlexer::LexerConfig;
///
/// let config = LexerConfig::default()
///     .punctuation(true)
///     .source_keyword("source");
/// ```
///
/// Configs also load from TOML, with missing keys taking their defaults:
///
/// ```toml
/// posix = false
/// punctuation_chars = "();"
/// source_keyword = "include"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// POSIX rules: backslash escapes, quote removal, Latin-1 word characters.
    pub posix: bool,
    /// Characters grouped into punctuation tokens. Empty disables
    /// punctuation mode.
    pub punctuation_chars: String,
    /// Treat every non-whitespace, non-punctuation character as part of a word.
    pub whitespace_split: bool,
    pub whitespace: String,
    pub word_chars: String,
    pub quotes: String,
    pub escape: String,
    /// Quotes inside which the escape character is honored.
    pub escaped_quotes: String,
    /// Characters that start a comment running to the end of the line.
    pub commenters: String,
    /// Token that makes the following token name a file to include.
    /// `None` disables inclusion.
    pub source_keyword: Option<String>,
    /// Maximum number of suspended sources. `None` means unlimited.
    pub max_include_depth: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            posix: true,
            punctuation_chars: String::new(),
            whitespace_split: false,
            whitespace: DEFAULT_WHITESPACE.to_string(),
            word_chars: DEFAULT_WORD_CHARS.to_string(),
            quotes: DEFAULT_QUOTES.to_string(),
            escape: DEFAULT_ESCAPE.to_string(),
            escaped_quotes: DEFAULT_ESCAPED_QUOTES.to_string(),
            commenters: DEFAULT_COMMENTERS.to_string(),
            source_keyword: None,
            max_include_depth: None,
        }
    }
}

impl LexerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LexError> {
        toml::from_str(text).map_err(|e| LexError::Config(e.to_string()))
    }

    /// Enable or disable POSIX mode.
    pub fn posix(mut self, enabled: bool) -> Self {
        self.posix = enabled;
        self
    }

    /// Enable punctuation mode with the default set `();<>|&`, or disable it.
    pub fn punctuation(mut self, enabled: bool) -> Self {
        self.punctuation_chars = if enabled {
            DEFAULT_PUNCTUATION_CHARS.to_string()
        } else {
            String::new()
        };
        self
    }

    /// Enable punctuation mode with a custom set of characters.
    pub fn punctuation_chars(mut self, chars: impl Into<String>) -> Self {
        self.punctuation_chars = chars.into();
        self
    }

    pub fn whitespace_split(mut self, enabled: bool) -> Self {
        self.whitespace_split = enabled;
        self
    }

    pub fn whitespace(mut self, chars: impl Into<String>) -> Self {
        self.whitespace = chars.into();
        self
    }

    pub fn word_chars(mut self, chars: impl Into<String>) -> Self {
        self.word_chars = chars.into();
        self
    }

    pub fn quotes(mut self, chars: impl Into<String>) -> Self {
        self.quotes = chars.into();
        self
    }

    pub fn escape(mut self, chars: impl Into<String>) -> Self {
        self.escape = chars.into();
        self
    }

    pub fn escaped_quotes(mut self, chars: impl Into<String>) -> Self {
        self.escaped_quotes = chars.into();
        self
    }

    /// Set the comment leaders. An empty string disables comments.
    pub fn commenters(mut self, chars: impl Into<String>) -> Self {
        self.commenters = chars.into();
        self
    }

    /// Enable inclusion: `keyword FILE` splices in the tokens of `FILE`.
    pub fn source_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.source_keyword = Some(keyword.into());
        self
    }

    /// Limit how many sources may be suspended at once.
    pub fn max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = Some(depth);
        self
    }

    /// Whether punctuation mode is on.
    pub fn is_punctuation_mode(&self) -> bool {
        !self.punctuation_chars.is_empty()
    }
}

/// A set of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet(HashSet<char>);

impl CharSet {
    pub fn new(chars: &str) -> Self {
        Self(chars.chars().collect())
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn extend(&mut self, chars: &str) {
        self.0.extend(chars.chars());
    }

    fn remove_all(&mut self, other: &CharSet) {
        self.0.retain(|c| !other.contains(*c));
    }
}

/// Character classification tables, built once from a [`LexerConfig`].
#[derive(Debug, Clone)]
pub struct CharClasses {
    pub whitespace: CharSet,
    pub word: CharSet,
    pub quotes: CharSet,
    pub escape: CharSet,
    pub escaped_quotes: CharSet,
    pub commenters: CharSet,
    pub punctuation: CharSet,
}

impl CharClasses {
    /// Build the tables, applying the POSIX and punctuation adjustments to
    /// the word characters.
    pub fn new(config: &LexerConfig) -> Self {
        let punctuation = CharSet::new(&config.punctuation_chars);
        let mut word = CharSet::new(&config.word_chars);
        if config.posix {
            word.extend(POSIX_WORD_CHARS);
        }
        if !punctuation.is_empty() {
            word.extend(PUNCTUATION_WORD_CHARS);
            word.remove_all(&punctuation);
        }
        Self {
            whitespace: CharSet::new(&config.whitespace),
            word,
            quotes: CharSet::new(&config.quotes),
            escape: CharSet::new(&config.escape),
            escaped_quotes: CharSet::new(&config.escaped_quotes),
            commenters: CharSet::new(&config.commenters),
            punctuation,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
