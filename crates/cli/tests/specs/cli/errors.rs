//! CLI error handling specs
//!
//! Verify error leaders, context lines and exit codes.

use crate::prelude::*;

#[test]
fn unterminated_quote_from_stdin() {
    cli()
        .stdin("echo 'oops")
        .fails()
        .code(1)
        .stdout_eq("Token: \"echo\"\n")
        .stderr_eq("Error: \"<input>\", line 1: no closing quotation\n  1 | echo 'oops\n");
}

#[test]
fn unterminated_escape_names_file_and_line() {
    let temp = Project::empty();
    temp.file("script.sh", "ok\ntrailing \\");

    temp.shlexer()
        .args(&["script.sh"])
        .fails()
        .stderr_has("Error: \"script.sh\", line 2: no escaped character")
        .stderr_has("  2 | trailing \\");
}

#[test]
fn json_output_is_empty_on_error() {
    cli()
        .stdin("a \"b")
        .args(&["-o", "json"])
        .fails()
        .stdout_eq("")
        .stderr_has("no closing quotation");
}

#[test]
fn missing_input_file() {
    let temp = Project::empty();
    temp.shlexer()
        .args(&["absent.txt"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read 'absent.txt'");
}
