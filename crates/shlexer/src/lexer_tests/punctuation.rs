// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::tokens;
use crate::config::LexerConfig;

fn punct_tokens(input: &str) -> Vec<String> {
    tokens(input, LexerConfig::default().punctuation(true))
}

#[yare::parameterized(
    and_list      = { "a && b; c", &["a", "&&", "b", ";", "c"] },
    redirect      = { "echo foo>bar.txt", &["echo", "foo", ">", "bar.txt"] },
    subshell      = { "(a)", &["(", "a", ")"] },
    pipe_stderr   = { "a|&b", &["a", "|&", "b"] },
    path_symbols  = { "ls ~/dir/*.py", &["ls", "~/dir/*.py"] },
    quoted_punct  = { "echo 'a;b'>f", &["echo", "a;b", ">", "f"] },
    comment_after = { "a;# c\nb", &["a", ";", "b"] },
)]
fn punctuation_runs(input: &str, expected: &[&str]) {
    assert_eq!(punct_tokens(input), expected);
}

#[test]
fn custom_punctuation_set() {
    let config = LexerConfig::default().punctuation_chars(";");
    assert_eq!(tokens("a;;b|c", config), vec!["a", ";;", "b", "|", "c"]);
}

#[test]
fn punctuation_with_whitespace_split() {
    let config = LexerConfig::default().punctuation(true).whitespace_split(true);
    assert_eq!(tokens("a;b c", config.clone()), vec!["a", ";", "b", "c"]);
    assert_eq!(tokens("a-b$c", config), vec!["a-b$c"]);
}

#[test]
fn punctuation_in_compat_mode_keeps_quotes() {
    let config = LexerConfig::default().punctuation(true).posix(false);
    assert_eq!(tokens("a&&'b c'", config), vec!["a", "&&", "'b c'"]);
}
