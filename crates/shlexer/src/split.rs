// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot helpers: split a string into words and join words back.

use crate::config::LexerConfig;
use crate::error::LexError;
use crate::lexer::Lexer;
use crate::quote::quote;

/// Split `text` into words using shell-like syntax.
///
/// Only whitespace separates words. When `comments` is false, `#` is an
/// ordinary character. `posix` selects POSIX quoting rules.
///
/// # Examples
///
/// ```ignore
/// use shlexer::split;
///
/// let words = split("ls -l 'somefile; ls -xz ~'", false, true)?;
/// assert_eq!(words, vec!["ls", "-l", "somefile; ls -xz ~"]);
/// # Ok::<(), shlexer::LexError>(())
/// ```
pub fn split(text: &str, comments: bool, posix: bool) -> Result<Vec<String>, LexError> {
    let mut config = LexerConfig::default().posix(posix).whitespace_split(true);
    if !comments {
        config = config.commenters("");
    }
    Lexer::from_text(text, config).collect()
}

/// Quote each argument and join them with spaces.
///
/// The result splits back into the original arguments in POSIX mode.
///
/// ```ignore
/// use shlexer::join;
///
/// assert_eq!(join(["echo", "hello world"]), "echo 'hello world'");
/// ```
pub fn join<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
