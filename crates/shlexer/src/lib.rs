// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell-style lexical analysis.
//!
//! This crate splits text into tokens following the quoting, escaping and
//! comment rules of Unix shells. It is meant for simple command languages,
//! configuration files and argument strings, not for full shell grammar.
//!
//! # Quick Start
//!
//! ```ignore
//! use shlexer::{join, split};
//!
//! let words = split("cp 'my file.txt' backup/", false, true)?;
//! assert_eq!(words, vec!["cp", "my file.txt", "backup/"]);
//! assert_eq!(join(&words), "cp 'my file.txt' backup/");
//! # Ok::<(), shlexer::LexError>(())
//! ```
//!
//! # Features
//!
//! - **POSIX and compatibility modes**: quote removal and backslash escapes,
//!   or quotes kept verbatim
//! - **Punctuation mode**: `&&`, `;`, `|` and friends as separate tokens
//! - **Pushback**: return tokens to the stream for lookahead
//! - **Inclusion**: a configurable keyword splices in another file's tokens
//! - **Diagnostics**: every error carries the file name and line number
//!
//! # Architecture
//!
//! ```text
//! Lexer
//! ├── pushback: tokens returned first (LIFO)
//! ├── source: Box<dyn CharSource>   (TextSource | FileSource | custom)
//! └── stack: SourceStack            (suspended sources, innermost last)
//! ```
//!
//! [`Lexer::get_token`] is the main entry point. [`Lexer::read_token`]
//! exposes the raw state machine without pushback or inclusion.

mod config;
mod error;
mod lexer;
mod location;
mod quote;
mod source;
mod split;
mod stack;

// Configuration
pub use config::{
    CharClasses, CharSet, LexerConfig, DEFAULT_COMMENTERS, DEFAULT_ESCAPE, DEFAULT_ESCAPED_QUOTES,
    DEFAULT_PUNCTUATION_CHARS, DEFAULT_QUOTES, DEFAULT_WHITESPACE, DEFAULT_WORD_CHARS,
    POSIX_WORD_CHARS, PUNCTUATION_WORD_CHARS,
};

// Errors and locations
pub use error::LexError;
pub use location::{error_leader, line_context, Location, UNNAMED_SOURCE};

// Lexer
pub use lexer::{resolve_include_path, IncludeHook, Included, Lexer, State};

// Character sources
pub use source::{CharSource, FileSource, TextSource};
pub use stack::{Lookahead, SourceFrame, SourceStack};

// One-shot helpers
pub use quote::quote;
pub use split::{join, split};
