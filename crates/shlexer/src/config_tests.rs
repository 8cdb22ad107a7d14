// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn default_is_posix_without_punctuation() {
    let config = LexerConfig::default();
    assert!(config.posix);
    assert!(!config.is_punctuation_mode());
    assert!(!config.whitespace_split);
    assert_eq!(config.source_keyword, None);
}

#[test]
fn punctuation_builder_uses_default_set() {
    let config = LexerConfig::default().punctuation(true);
    assert_eq!(config.punctuation_chars, DEFAULT_PUNCTUATION_CHARS);
    assert!(!config.punctuation(false).is_punctuation_mode());
}

#[test]
fn posix_adds_latin1_word_chars() {
    let posix = CharClasses::new(&LexerConfig::default());
    let compat = CharClasses::new(&LexerConfig::default().posix(false));
    assert!(posix.word.contains('é'));
    assert!(posix.word.contains('ß'));
    assert!(!compat.word.contains('é'));
    assert!(compat.word.contains('z'));
}

#[test]
fn punctuation_adds_filename_symbols() {
    let classes = CharClasses::new(&LexerConfig::default().punctuation(true));
    for c in PUNCTUATION_WORD_CHARS.chars() {
        assert!(classes.word.contains(c), "missing {c:?}");
    }
    assert!(classes.punctuation.contains('|'));
}

#[test]
fn punctuation_chars_removed_from_word_chars() {
    // '~' and '-' would be word characters, but they are punctuation here
    let config = LexerConfig::default().punctuation_chars("~-;");
    let classes = CharClasses::new(&config);
    assert!(!classes.word.contains('~'));
    assert!(!classes.word.contains('-'));
    assert!(classes.word.contains('.'));
}

#[test]
fn custom_word_chars_replace_default() {
    let classes = CharClasses::new(&LexerConfig::default().posix(false).word_chars("ab"));
    assert_eq!(classes.word.len(), 2);
    assert!(!classes.word.contains('c'));
}

#[test]
fn empty_commenters_disable_comments() {
    let classes = CharClasses::new(&LexerConfig::default().commenters(""));
    assert!(classes.commenters.is_empty());
}

// =============================================================================
// TOML
// =============================================================================

#[test]
fn toml_partial_config_keeps_defaults() {
    let config = LexerConfig::from_toml_str("posix = false\nsource_keyword = \"include\"").unwrap();
    assert!(!config.posix);
    assert_eq!(config.source_keyword.as_deref(), Some("include"));
    assert_eq!(config.whitespace, DEFAULT_WHITESPACE);
    assert_eq!(config.commenters, DEFAULT_COMMENTERS);
}

#[test]
fn toml_empty_is_default() {
    assert_eq!(LexerConfig::from_toml_str("").unwrap(), LexerConfig::default());
}

#[test]
fn toml_unknown_key_is_rejected() {
    let err = LexerConfig::from_toml_str("posixx = true").unwrap_err();
    assert!(matches!(err, LexError::Config(_)));
}

#[test]
fn toml_wrong_type_is_rejected() {
    let err = LexerConfig::from_toml_str("whitespace_split = \"yes\"").unwrap_err();
    assert!(err.to_string().starts_with("invalid lexer config"));
}

#[test]
fn toml_round_trip() {
    let config = LexerConfig::default()
        .punctuation(true)
        .max_include_depth(4)
        .source_keyword("source");
    let text = toml::to_string(&config).unwrap();
    assert_eq!(LexerConfig::from_toml_str(&text).unwrap(), config);
}
