use crate::common::{run, stdout};

#[test]
fn help_lists_every_flag() {
    let output = run(&["--help"]);
    assert!(output.status.success(), "--help should succeed");

    let help = stdout(&output);
    for needle in [
        "--ext",
        "--exclude-dir",
        "--pattern",
        "--max-lines",
        "--keep-going",
        "COPYRIGHT_CHECK_",
    ] {
        assert!(help.contains(needle), "--help should list {needle}, got:\n{help}");
    }
}

#[test]
fn version_output_uses_name_and_semver_format() {
    let output = run(&["--version"]);
    assert!(output.status.success(), "--version should succeed");

    let text = stdout(&output).trim().to_string();
    let mut parts = text.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();

    assert_eq!(name, "copyright-check", "unexpected binary name: {text}");
    assert!(
        version.chars().all(|c| c.is_ascii_digit() || c == '.') && version.split('.').count() == 3,
        "version should look like SemVer (X.Y.Z), got: {text}"
    );
    assert!(parts.next().is_none(), "version output should be two tokens");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run(&["--no-such-flag", "."]);
    assert_eq!(output.status.code(), Some(2));
}
