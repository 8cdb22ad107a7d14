// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

mod include;
mod punctuation;
mod pushback;
mod read;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

/// Drain a lexer over `input`, panicking on error.
fn tokens(input: &str, config: LexerConfig) -> Vec<String> {
    Lexer::from_text(input, config)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// Drain a lexer over `input` with the default (POSIX) config.
fn posix_tokens(input: &str) -> Vec<String> {
    tokens(input, LexerConfig::default())
}

/// Drain a lexer over `input` in non-POSIX mode.
fn compat_tokens(input: &str) -> Vec<String> {
    tokens(input, LexerConfig::default().posix(false))
}

/// Drain a lexer over `input`, returning the first error.
fn first_error(input: &str, config: LexerConfig) -> LexError {
    Lexer::from_text(input, config)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err()
}

#[test]
fn empty_input_is_end_of_input() {
    let mut lexer = Lexer::from_text("", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap(), None);
    assert_eq!(lexer.state(), State::Eof);
    assert_eq!(lexer.get_token().unwrap(), None);
}

#[test]
fn error_leader_defaults_to_current_position() {
    let mut lexer = Lexer::new(
        Box::new(TextSource::new("a\nb\nc")),
        Some("build.conf".into()),
        LexerConfig::default(),
    );
    lexer.get_token().unwrap();
    lexer.get_token().unwrap();
    assert_eq!(lexer.error_leader(None, None), "\"build.conf\", line 3: ");
    assert_eq!(
        lexer.error_leader(Some("other.conf"), Some(10)),
        "\"other.conf\", line 10: "
    );
}

#[test]
fn error_leader_without_file_name() {
    let lexer = Lexer::from_text("", LexerConfig::default());
    assert_eq!(lexer.error_leader(None, None), "\"<input>\", line 1: ");
}

#[test]
fn iterator_yields_errors() {
    let mut lexer = Lexer::from_text("ok 'open", LexerConfig::default());
    assert_eq!(lexer.next().unwrap().unwrap(), "ok");
    assert!(matches!(
        lexer.next(),
        Some(Err(LexError::UnterminatedQuote { .. }))
    ));
    assert!(lexer.next().is_none());
}

#[test]
fn tracing_does_not_change_tokens() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("shlexer=trace"))
        .with_test_writer()
        .try_init();
    assert_eq!(
        tokens(
            "a 'b c' # note\nd",
            LexerConfig::default().whitespace_split(true)
        ),
        vec!["a", "b c", "d"]
    );
}

#[test]
fn debug_output_names_position() {
    let lexer = Lexer::from_text("", LexerConfig::default());
    let debug = format!("{lexer:?}");
    assert!(debug.contains("lineno: 1"), "{debug}");
    assert!(debug.contains("Start"), "{debug}");
}
