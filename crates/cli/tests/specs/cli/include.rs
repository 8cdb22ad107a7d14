//! Inclusion specs
//!
//! Verify `--source` splices in files relative to the including file.

use crate::prelude::*;

#[test]
fn source_keyword_includes_file() {
    let temp = Project::empty();
    temp.file("main.conf", "A\nsource lib/inc.conf\nB\n");
    temp.file("lib/inc.conf", "X Y\n");

    temp.shlexer()
        .args(&["--whitespace-split", "--source", "source", "main.conf"])
        .passes()
        .stdout_eq("Token: \"A\"\nToken: \"X\"\nToken: \"Y\"\nToken: \"B\"\n");
}

#[test]
fn without_source_flag_keyword_is_a_token() {
    let temp = Project::empty();
    temp.file("main.conf", "source inc.conf\n");

    temp.shlexer()
        .args(&["--whitespace-split", "main.conf"])
        .passes()
        .stdout_eq("Token: \"source\"\nToken: \"inc.conf\"\n");
}

#[test]
fn missing_include_fails_with_location() {
    let temp = Project::empty();
    temp.file("main.conf", "A\nsource nope.conf\n");

    temp.shlexer()
        .args(&["--whitespace-split", "--source", "source", "main.conf"])
        .fails()
        .stdout_eq("Token: \"A\"\n")
        .stderr_has("Error: \"main.conf\", line 3: cannot include nope.conf");
}
