//! Config file specs
//!
//! Verify `--config` and `SHLEXER_CONFIG` load TOML lexer configs.

use crate::prelude::*;

#[test]
fn config_flag_sets_options() {
    let temp = Project::empty();
    temp.file("lexer.toml", "whitespace_split = true\npunctuation_chars = \";\"\n");

    temp.shlexer()
        .stdin("a-b;c")
        .args(&["--config", "lexer.toml"])
        .passes()
        .stdout_eq("Token: \"a-b\"\nToken: \";\"\nToken: \"c\"\n");
}

#[test]
fn config_from_environment() {
    let temp = Project::empty();
    temp.file("lexer.toml", "posix = false\n");

    temp.shlexer()
        .stdin("'q'")
        .env("SHLEXER_CONFIG", temp.path().join("lexer.toml"))
        .passes()
        .stdout_eq("Token: \"'q'\"\n");
}

#[test]
fn flags_override_config() {
    let temp = Project::empty();
    temp.file("lexer.toml", "posix = false\n");

    temp.shlexer()
        .stdin("'q'")
        .args(&["--config", "lexer.toml", "--posix"])
        .passes()
        .stdout_eq("Token: \"q\"\n");
}

#[test]
fn invalid_config_fails() {
    let temp = Project::empty();
    temp.file("lexer.toml", "posixx = true\n");

    temp.shlexer()
        .stdin("a")
        .args(&["--config", "lexer.toml"])
        .fails()
        .stderr_has("Error: in config 'lexer.toml'")
        .stderr_has("invalid lexer config");
}

#[test]
fn invalid_config_fails_without_reading_large_input() {
    let temp = Project::empty();
    temp.file("lexer.toml", "posixx = true\n");

    temp.shlexer()
        .stdin(&"word ".repeat(200_000))
        .args(&["--config", "lexer.toml"])
        .fails()
        .stderr_has("invalid lexer config");
}
