//! Tokenizing specs
//!
//! Verify token output for each lexer mode, from stdin and from files.

use crate::prelude::*;

#[test]
fn stdin_text_output() {
    cli()
        .stdin("ls -l 'somefile; ls -xz ~'\n")
        .args(&["--whitespace-split"])
        .passes()
        .stdout_eq(
            r#"Token: "ls"
Token: "-l"
Token: "somefile; ls -xz ~"
"#,
        );
}

#[test]
fn dash_reads_stdin() {
    cli()
        .stdin("a b")
        .args(&["-"])
        .passes()
        .stdout_eq("Token: \"a\"\nToken: \"b\"\n");
}

#[test]
fn empty_input_prints_nothing() {
    cli().stdin("").passes().stdout_eq("");
}

#[test]
fn file_input() {
    let temp = Project::empty();
    temp.file("cmds.txt", "# build\nmake all # everything\n");

    temp.shlexer()
        .args(&["cmds.txt"])
        .passes()
        .stdout_eq("Token: \"make\"\nToken: \"all\"\n");
}

#[test]
fn json_output() {
    cli()
        .stdin("a && b")
        .args(&["--punctuation", "-o", "json"])
        .passes()
        .stdout_eq("[\n  \"a\",\n  \"&&\",\n  \"b\"\n]\n");
}

#[test]
fn non_posix_keeps_quotes() {
    cli()
        .stdin("echo \"hi there\"")
        .args(&["--no-posix"])
        .passes()
        .stdout_eq("Token: \"echo\"\nToken: \"\\\"hi there\\\"\"\n");
}

#[test]
fn empty_quotes_are_a_token() {
    cli()
        .stdin("a '' b")
        .passes()
        .stdout_eq("Token: \"a\"\nToken: \"\"\nToken: \"b\"\n");
}

#[test]
fn no_comments_keeps_hash() {
    cli()
        .stdin("x #y")
        .args(&["--no-comments", "--whitespace-split"])
        .passes()
        .stdout_eq("Token: \"x\"\nToken: \"#y\"\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .stdin("a")
        .env("SHLEXER_LOG", "shlexer=debug")
        .passes()
        .stdout_eq("Token: \"a\"\n")
        .stderr_has("raw token");
}
