//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--punctuation")
        .stdout_has("--source <KEYWORD>");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_flag_fails() {
    cli()
        .args(&["--bogus"])
        .fails()
        .code(2)
        .stderr_has("--bogus");
}
