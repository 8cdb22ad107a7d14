// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting strings so the lexer reads them back as a single token.
//!
//! The rules are deliberately simple:
//!
//! - The empty string becomes `''`.
//! - A string made only of ASCII letters, digits and `@%+=:,./-` is returned
//!   intact.
//! - Anything else is wrapped in single quotes, with each embedded `'`
//!   written as `'"'"'` (close quote, double-quoted `'`, reopen quote).
//!
//! # Examples
//!
//! ```ignore
//! use shlexer::quote;
//!
//! assert_eq!(quote("foo.txt"), "foo.txt");
//! assert_eq!(quote(""), "''");
//! assert_eq!(quote("my file"), "'my file'");
//! assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
//! ```

use std::borrow::Cow::{self, Borrowed, Owned};

#[must_use]
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quote `s` for use as a single shell word.
#[must_use]
pub fn quote(s: &str) -> Cow<'_, str> {
    if s.is_empty() {
        return Borrowed("''");
    }
    if s.chars().all(is_safe) {
        return Borrowed(s);
    }
    Owned(format!("'{}'", s.replace('\'', r#"'"'"'"#)))
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
