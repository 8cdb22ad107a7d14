// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State machine tests: words, quotes, escapes, comments, line numbers.

use super::{compat_tokens, first_error, posix_tokens, tokens};
use crate::config::LexerConfig;
use crate::error::LexError;
use crate::lexer::{Lexer, State};

// =============================================================================
// Words and lone characters
// =============================================================================

#[test]
fn words_separated_by_whitespace() {
    assert_eq!(posix_tokens("  foo\tbar\r\nbaz  "), vec!["foo", "bar", "baz"]);
}

#[test]
fn non_word_character_is_its_own_token() {
    assert_eq!(posix_tokens("ls -l"), vec!["ls", "-", "l"]);
}

#[test]
fn non_word_character_ends_word() {
    // ';' is un-read as a pushed-back token, then returned on its own
    assert_eq!(posix_tokens("a;b"), vec!["a", ";", "b"]);
    assert_eq!(posix_tokens("foo=bar"), vec!["foo", "=", "bar"]);
}

#[test]
fn posix_latin1_letters_are_word_characters() {
    assert_eq!(posix_tokens("café naïve"), vec!["café", "naïve"]);
    assert_eq!(compat_tokens("café"), vec!["caf", "é"]);
}

#[test]
fn whitespace_split_keeps_symbols_in_words() {
    let config = LexerConfig::default().whitespace_split(true);
    assert_eq!(
        tokens("ls -l ~/a/*.txt $HOME", config),
        vec!["ls", "-l", "~/a/*.txt", "$HOME"]
    );
}

// =============================================================================
// Quotes
// =============================================================================

#[test]
fn posix_quotes_are_removed() {
    assert_eq!(posix_tokens("'a b' \"c d\""), vec!["a b", "c d"]);
}

#[test]
fn posix_quotes_join_adjacent_text() {
    assert_eq!(posix_tokens("foo'bar baz'qux"), vec!["foobar bazqux"]);
    assert_eq!(posix_tokens("\"a\"'b'"), vec!["ab"]);
}

#[test]
fn posix_empty_quotes_yield_empty_token() {
    assert_eq!(posix_tokens("a \"\" b ''"), vec!["a", "", "b", ""]);
}

#[test]
fn single_quotes_keep_everything_verbatim() {
    assert_eq!(posix_tokens(r"'a\b # $c'"), vec![r"a\b # $c"]);
}

#[test]
fn compat_quotes_are_kept() {
    assert_eq!(compat_tokens("'a b' c"), vec!["'a b'", "c"]);
    assert_eq!(compat_tokens("\"x\""), vec!["\"x\""]);
}

#[test]
fn compat_quote_inside_word_does_not_open_quote() {
    let config = LexerConfig::default().posix(false).whitespace_split(true);
    assert_eq!(tokens("a\"b c\"d", config), vec!["a\"b", "c\"d"]);
}

#[test]
fn compat_closing_quote_ends_token() {
    assert_eq!(compat_tokens("'a'b"), vec!["'a'", "b"]);
}

#[test]
fn quotes_span_newlines_and_count_lines() {
    let mut lexer = Lexer::from_text("'one\ntwo' x", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("one\ntwo"));
    assert_eq!(lexer.lineno(), 2);
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn escape_outside_quotes_takes_next_char() {
    assert_eq!(posix_tokens(r"a\ b \'c"), vec!["a b", "'c"]);
}

#[test]
fn escape_at_start_of_token() {
    assert_eq!(posix_tokens(r"\;x"), vec![";x"]);
}

#[test]
fn escape_in_double_quotes_only_for_quote_and_backslash() {
    assert_eq!(posix_tokens(r#""a\"b""#), vec![r#"a"b"#]);
    assert_eq!(posix_tokens(r#""a\\b""#), vec![r"a\b"]);
    assert_eq!(posix_tokens(r#""a\nb""#), vec![r"a\nb"]);
}

#[test]
fn escape_not_honored_in_single_quotes() {
    assert_eq!(posix_tokens(r"'a\'"), vec![r"a\"]);
}

#[test]
fn escaped_quotes_set_is_configurable() {
    let config = LexerConfig::default().escaped_quotes("\"'");
    assert_eq!(tokens(r"'it\'s'", config), vec!["it's"]);
}

#[test]
fn compat_mode_has_no_escapes() {
    let config = LexerConfig::default().posix(false).whitespace_split(true);
    assert_eq!(tokens(r"a\ b", config), vec![r"a\", "b"]);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comment_line_is_skipped() {
    assert_eq!(posix_tokens("# all comment\nword"), vec!["word"]);
}

#[test]
fn posix_comment_ends_word() {
    assert_eq!(posix_tokens("word# trailing\nnext"), vec!["word", "next"]);
}

#[test]
fn compat_comment_inside_word_continues_word() {
    // The comment is dropped but the word carries on onto the next line
    assert_eq!(compat_tokens("ab# note\ncd"), vec!["abcd"]);
}

#[test]
fn comment_char_in_quotes_is_literal() {
    assert_eq!(posix_tokens("'# not a comment'"), vec!["# not a comment"]);
}

#[test]
fn custom_commenters() {
    let config = LexerConfig::default().commenters(";");
    assert_eq!(tokens("a ; b\nc # d", config), vec!["a", "c", "#", "d"]);
}

// =============================================================================
// Line numbers
// =============================================================================

#[test]
fn line_numbers_follow_newlines() {
    let mut lexer = Lexer::from_text("a\nb\n\nc", LexerConfig::default());
    assert_eq!(lexer.lineno(), 1);
    lexer.get_token().unwrap();
    assert_eq!(lexer.lineno(), 2);
    lexer.get_token().unwrap();
    assert_eq!(lexer.lineno(), 3);
    lexer.get_token().unwrap();
    assert_eq!(lexer.lineno(), 4);
}

#[test]
fn skipped_comments_count_lines() {
    let mut lexer = Lexer::from_text("# one\n# two\nx", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("x"));
    assert_eq!(lexer.lineno(), 3);
}

// =============================================================================
// Errors
// =============================================================================

#[yare::parameterized(
    double_quote = { "\"abc", '"' },
    single_quote = { "x 'abc", '\'' },
    after_escape = { "\"a\\\"", '"' },
)]
fn unterminated_quote(input: &str, quote: char) {
    match first_error(input, LexerConfig::default()) {
        LexError::UnterminatedQuote { quote: q, .. } => assert_eq!(q, quote),
        other => panic!("expected UnterminatedQuote, got {other:?}"),
    }
}

#[test]
fn unterminated_quote_in_compat_mode() {
    let err = first_error("'abc", LexerConfig::default().posix(false));
    assert!(matches!(err, LexError::UnterminatedQuote { quote: '\'', .. }));
}

#[test]
fn unterminated_escape() {
    let err = first_error("abc\\", LexerConfig::default());
    assert!(matches!(err, LexError::UnterminatedEscape { .. }));
    assert_eq!(err.to_string(), "no escaped character");
}

#[test]
fn error_reports_line_and_resets_token() {
    let mut lexer = Lexer::from_text("a\n'b", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("a"));
    let err = lexer.get_token().unwrap_err();
    let location = err.location().unwrap();
    assert_eq!(location.line, 2);
    assert_eq!(err.diagnostic(), "\"<input>\", line 2: no closing quotation");
    assert_eq!(lexer.state(), State::Start);
    assert_eq!(lexer.get_token().unwrap(), None);
}

#[test]
fn read_token_reports_end_of_active_source() {
    let mut lexer = Lexer::from_text("one", LexerConfig::default());
    assert_eq!(lexer.read_token().unwrap().as_deref(), Some("one"));
    assert_eq!(lexer.state(), State::Eof);
    assert_eq!(lexer.read_token().unwrap(), None);
}
