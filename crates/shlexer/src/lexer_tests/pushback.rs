// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::LexerConfig;
use crate::lexer::Lexer;

#[test]
fn pushed_token_comes_first() {
    let mut lexer = Lexer::from_text("a b", LexerConfig::default());
    lexer.push_token("Z");
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("Z"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("a"));
}

#[test]
fn pushback_is_last_in_first_out() {
    let mut lexer = Lexer::from_text("", LexerConfig::default());
    lexer.push_token("1");
    lexer.push_token("2");
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("2"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("1"));
    assert_eq!(lexer.get_token().unwrap(), None);
}

#[test]
fn peek_by_pushing_back() {
    let mut lexer = Lexer::from_text("first second", LexerConfig::default());
    let tok = lexer.get_token().unwrap().unwrap();
    lexer.push_token(tok);
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("first"));
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("second"));
}

#[test]
fn pushback_after_end_of_input() {
    let mut lexer = Lexer::from_text("x", LexerConfig::default());
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("x"));
    assert_eq!(lexer.get_token().unwrap(), None);
    lexer.push_token("again");
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("again"));
    assert_eq!(lexer.get_token().unwrap(), None);
}

#[test]
fn pushed_back_keyword_is_not_an_inclusion() {
    let config = LexerConfig::default().source_keyword("source");
    let mut lexer = Lexer::from_text("", config);
    lexer.push_token("source");
    assert_eq!(lexer.get_token().unwrap().as_deref(), Some("source"));
    assert_eq!(lexer.depth(), 0);
}
