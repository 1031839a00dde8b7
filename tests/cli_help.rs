use std::process::Command;

#[test]
fn test_help_documents_exit_status_and_flags() {
    let bin = env!("CARGO_BIN_EXE_codeql-perms");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--dir", "--action", "--config", "--json", "--annotations"] {
        assert!(stdout.contains(flag), "help should list {flag}; got:\n{stdout}");
    }
    assert!(
        stdout.contains("Exit status is the number of permission errors found"),
        "help should explain the exit status; got:\n{stdout}"
    );
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_codeql-perms");

    let output = Command::new(bin).arg("--no-such-flag").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
