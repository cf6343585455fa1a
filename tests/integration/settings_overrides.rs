use crate::common::{checker, run_on, stderr, write};

#[test]
fn extension_flag_replaces_the_default_set() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "main.go", "package main\n");
    write(temp.path(), "lib.rs", "// Copyright 2024\n");

    let output = run_on(temp.path(), &["--ext", "rs"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
}

#[test]
fn environment_extends_the_window_and_flags_win() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "x.go", "1\n2\n3\n4\n5\n6\n// Copyright\n");

    let from_env = checker()
        .env("COPYRIGHT_CHECK_MAX_LINES", "10")
        .arg(temp.path())
        .output()
        .expect("checker should run");
    assert!(from_env.status.success(), "stderr:\n{}", stderr(&from_env));

    let flag_wins = checker()
        .env("COPYRIGHT_CHECK_MAX_LINES", "10")
        .args(["--max-lines", "5"])
        .arg(temp.path())
        .output()
        .expect("checker should run");
    assert_eq!(flag_wins.status.code(), Some(1));
}

#[test]
fn environment_list_replaces_excluded_directories() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "third_party/lib.c", "int lib;\n");

    let output = checker()
        .env("COPYRIGHT_CHECK_EXCLUDE_DIRS", "third_party,vendor")
        .arg(temp.path())
        .output()
        .expect("checker should run");
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
}

#[test]
fn custom_patterns_are_joined_with_or() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "a.go", "// SPDX-License-Identifier: Apache-2.0\n");
    write(temp.path(), "b.go", "// Copyright 2017\n");

    let output = run_on(
        temp.path(),
        &["--pattern", "Copyright", "--pattern", "SPDX-License-Identifier"],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
}

#[test]
fn invalid_pattern_exits_one_with_message() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = run_on(temp.path(), &["--pattern", "(unclosed"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("(unclosed"),
        "stderr should name the pattern: {}",
        stderr(&output)
    );
}

#[test]
fn zero_line_window_is_rejected() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = run_on(temp.path(), &["--max-lines", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("max_lines"), "{}", stderr(&output));
}
