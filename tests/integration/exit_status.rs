use std::fs;

use crate::common::{run, run_on, scenario_tree, stderr, stdout, write};

#[test]
fn no_directories_exits_one_with_usage_message() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "No directories specified.\n");
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_header_is_reported_and_fails() {
    let temp = scenario_tree();

    let output = run_on(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Missing copyright in {}?\n", temp.path().join("b.c").display())
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn clean_tree_exits_zero_without_output() {
    let temp = scenario_tree();
    fs::remove_file(temp.path().join("b.c")).expect("remove b.c");

    let output = run_on(temp.path(), &[]);
    assert!(
        output.status.success(),
        "expected success; stderr:\n{}",
        stderr(&output)
    );
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_tree_passes() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let output = run_on(temp.path(), &[]);
    assert!(output.status.success());
}

#[test]
fn missing_root_is_fatal() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let missing = temp.path().join("nowhere");

    let output = run_on(&missing, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains(&missing.display().to_string()),
        "stderr should name the root: {}",
        stderr(&output)
    );
}

#[test]
fn vendored_and_unlisted_files_never_fail_the_run() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "vendor/golang.org/x/sys/unix.go", "package unix\n");
    write(temp.path(), "docs/readme.md", "no header\n");
    write(temp.path(), "cmd/main.go", "// Copyright 2017 Example Inc.\npackage main\n");

    let output = run_on(temp.path(), &[]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn header_below_line_five_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write(
        temp.path(),
        "late.c",
        "#include <a.h>\n#include <b.h>\n\n\nint x;\n/* Copyright 2020 */\n",
    );

    let output = run_on(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn repeated_runs_are_identical() {
    let temp = scenario_tree();
    let first = run_on(temp.path(), &[]);
    let second = run_on(temp.path(), &[]);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn keep_going_lists_every_failure_then_a_summary() {
    let temp = scenario_tree();
    write(temp.path(), "sub/d.go", "package sub\n");

    let output = run_on(temp.path(), &["--keep-going"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!(
            "Missing copyright in {}?\nMissing copyright in {}?\n2 file(s) missing copyright\n",
            temp.path().join("b.c").display(),
            temp.path().join("sub/d.go").display()
        )
    );
}

#[test]
fn later_roots_are_not_walked_after_a_failure() {
    let failing = scenario_tree();
    let output = crate::common::checker()
        .arg(failing.path())
        .arg(failing.path().join("does-not-exist"))
        .output()
        .expect("checker should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).starts_with("Missing copyright in"),
        "fail-fast should stop before the missing second root: {}",
        stderr(&output)
    );
}

#[cfg(unix)]
#[test]
fn unreadable_candidate_aborts_with_open_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("create temp dir");
    write(temp.path(), "locked.go", "// Copyright 2020\n");
    let locked = temp.path().join("locked.go");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod 000");
    if fs::File::open(&locked).is_ok() {
        // Privileged users bypass file modes; nothing to observe.
        return;
    }

    let output = run_on(temp.path(), &["--keep-going"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).expect("restore mode");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).starts_with(&format!("open {}:", locked.display())),
        "stderr: {}",
        stderr(&output)
    );
}
