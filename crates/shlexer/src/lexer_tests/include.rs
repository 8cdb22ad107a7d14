// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source stack and inclusion tests using in-memory sources.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use super::tokens;
use crate::config::LexerConfig;
use crate::error::LexError;
use crate::lexer::{resolve_include_path, IncludeHook, Included, Lexer};
use crate::source::{CharSource, TextSource};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A hook serving included sources from a fixed table.
fn memory_hook(files: &[(&str, &str)]) -> IncludeHook {
    let files: HashMap<String, String> = files
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();
    Box::new(move |name, _infile| {
        Ok(files.get(name).map(|text| Included {
            infile: name.to_string(),
            source: Box::new(TextSource::new(text.clone())),
        }))
    })
}

fn including(text: &str, files: &[(&str, &str)]) -> Lexer {
    Lexer::from_text(text, LexerConfig::default().source_keyword("source"))
        .with_include_hook(memory_hook(files))
}

/// Text source that counts how often it is closed.
#[derive(Debug)]
struct Tracked {
    inner: TextSource,
    closes: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(text: &str) -> (Self, Rc<Cell<usize>>) {
        let closes = Rc::new(Cell::new(0));
        let source = Self {
            inner: TextSource::new(text),
            closes: Rc::clone(&closes),
        };
        (source, closes)
    }
}

impl CharSource for Tracked {
    fn peek(&mut self) -> io::Result<Option<char>> {
        self.inner.peek()
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        self.inner.next_char()
    }

    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
        self.inner.close();
    }

    fn describe(&self) -> String {
        "tracked".to_string()
    }
}

// =============================================================================
// Inclusion directives
// =============================================================================

#[test]
fn included_tokens_are_spliced_in() {
    let mut lexer = including(
        "A\nsource \"included\"\nB",
        &[("included", "X\nY\n")],
    );
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("A"));

    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("X"));
    assert_eq!(lexer.infile(), Some("included"));
    assert_eq!(lexer.lineno(), 2);
    assert_eq!(lexer.depth(), 1);

    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("Y"));
    assert_eq!(lexer.lineno(), 3);

    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("B"));
    assert_eq!(lexer.infile(), None);
    assert_eq!(lexer.lineno(), 3);
    assert_eq!(lexer.depth(), 0);

    assert_eq!(lexer.get_token().unwrap(), None);
}

#[yare::parameterized(
    plain       = { LexerConfig::default() },
    punctuation = { LexerConfig::default().punctuation(true) },
)]
fn char_after_file_name_follows_included_tokens(config: LexerConfig) {
    let lexer = Lexer::from_text("A source inc;B", config.source_keyword("source"))
        .with_include_hook(memory_hook(&[("inc", "X Y")]));
    let toks: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(toks, vec!["A", "X", "Y", ";", "B"]);
}

#[test]
fn char_after_file_name_is_read_from_including_source() {
    let config = LexerConfig::default()
        .punctuation(true)
        .source_keyword("source");
    let mut lexer = Lexer::from_text("source inc;\nB", config)
        .with_include_hook(memory_hook(&[("inc", "X\n\nY")]));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("X"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("Y"));
    assert_eq!(lexer.lineno(), 3);

    assert_eq!(lexer.get_token().unwrap().as_deref(), Some(";"));
    assert_eq!(lexer.infile(), None);
    assert_eq!(lexer.lineno(), 2);
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("B"));
}

#[test]
fn tokens_pushed_inside_included_source_come_first_after_pop() {
    let mut lexer = including("a source inc;b", &[("inc", "x y")]);
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("a"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("x"));
    lexer.push_token("P");
    assert!(lexer.pop_source());

    let rest: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(rest, vec!["P", ";", "b"]);
}

#[test]
fn skipped_inclusion_keeps_lookahead_in_place() {
    let lexer = including("source skip;tail", &[]);
    let toks: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(toks, vec![";", "tail"]);
}

#[test]
fn nested_inclusion() {
    let lexer = including(
        "a source one b",
        &[("one", "c source two d"), ("two", "e")],
    );
    let toks: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(toks, vec!["a", "c", "e", "d", "b"]);
}

#[test]
fn hook_can_skip_inclusion() {
    let lexer = including("source skip tail", &[]);
    let toks: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(toks, vec!["tail"]);
}

#[test]
fn keyword_at_end_of_input() {
    let lexer = including("a source", &[]);
    let toks: Vec<String> = lexer.collect::<Result<_, _>>().unwrap();
    assert_eq!(toks, vec!["a"]);
}

#[test]
fn inclusion_off_by_default() {
    assert_eq!(
        tokens("source x", LexerConfig::default()),
        vec!["source", "x"]
    );
}

#[test]
fn hook_receives_including_file() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let hook: IncludeHook = Box::new(move |name, infile| {
        seen.borrow_mut()
            .push((name.to_string(), infile.map(str::to_string)));
        Ok(None)
    });
    let mut lexer = Lexer::new(
        Box::new(TextSource::new("source inc")),
        Some("main.conf".into()),
        LexerConfig::default().source_keyword("source"),
    )
    .with_include_hook(hook);
    assert_eq!(lexer.get_token().unwrap(), None);
    assert_eq!(
        *calls.borrow(),
        vec![("inc".to_string(), Some("main.conf".to_string()))]
    );
}

#[test]
fn hook_error_becomes_inclusion_error() {
    let hook: IncludeHook =
        Box::new(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "gone")));
    let config = LexerConfig::default()
        .posix(false)
        .source_keyword("source");
    let mut lexer = Lexer::from_text("source \"x.conf\"", config).with_include_hook(hook);

    match lexer.get_token().unwrap_err() {
        LexError::Inclusion {
            path,
            location,
            source,
        } => {
            assert_eq!(path, "x.conf");
            assert_eq!(location.line, 1);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Inclusion, got {other:?}"),
    }
}

#[test]
fn include_depth_limit() {
    let hook: IncludeHook = Box::new(|name, _| {
        Ok(Some(Included {
            infile: name.to_string(),
            source: Box::new(TextSource::new("source again\nZ")),
        }))
    });
    let config = LexerConfig::default()
        .source_keyword("source")
        .max_include_depth(2);
    let mut lexer = Lexer::from_text("source first", config).with_include_hook(hook);

    let err = lexer.get_token().unwrap_err();
    assert!(matches!(err, LexError::IncludeDepth { limit: 2, .. }));
    let location = err.location().unwrap();
    assert_eq!(location.infile.as_deref(), Some("again"));
    assert_eq!(err.to_string(), "inclusion nested deeper than 2 levels");
}

// =============================================================================
// Explicit push and pop
// =============================================================================

#[test]
fn pushed_source_is_read_then_closed() {
    let mut lexer = Lexer::from_text("outer tail", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("outer"));

    let (source, closes) = Tracked::new("inner");
    lexer.push_source(Box::new(source), Some("inner.txt".into()));
    assert_eq!(lexer.lineno(), 1);
    assert_eq!(lexer.infile(), Some("inner.txt"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("inner"));
    assert_eq!(closes.get(), 0);

    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("tail"));
    assert_eq!(closes.get(), 1);
    assert_eq!(lexer.infile(), None);
}

#[test]
fn pop_source_abandons_pushed_source() {
    let mut lexer = Lexer::from_text("outer", LexerConfig::default());
    let (source, closes) = Tracked::new("x y");
    lexer.push_source(Box::new(source), None);
    assert!(lexer.pop_source());
    assert_eq!(closes.get(), 1);
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("outer"));
}

#[test]
fn pop_source_without_suspended_source() {
    let mut lexer = Lexer::from_text("a", LexerConfig::default());
    assert!(!lexer.pop_source());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("a"));
}

// =============================================================================
// Path resolution
// =============================================================================

#[yare::parameterized(
    quoted      = { "\"a.txt\"", None, "a.txt" },
    no_infile   = { "sub/e", None, "sub/e" },
    sibling     = { "b.txt", Some("/etc/conf/main.conf"), "/etc/conf/b.txt" },
    absolute    = { "/abs/c", Some("/etc/x"), "/abs/c" },
    bare_infile = { "d", Some("main.conf"), "d" },
)]
fn resolves_include_path(name: &str, infile: Option<&str>, expected: &str) {
    assert_eq!(resolve_include_path(name, infile), PathBuf::from(expected));
}
