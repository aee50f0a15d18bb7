//! Process-level CLI contract: usage, exit codes, and handler-side
//! validation, exercised against the built binary.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notionctl"))
        .args(args)
        .env_remove("NOTION_TOKEN")
        .output()
        .expect("failed to spawn notionctl")
}

#[test]
fn unknown_command_exits_one_with_usage_on_stderr() {
    let output = run(&["bogus"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus"), "stderr: {}", stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn help_flag_exits_zero_with_usage_on_stdout() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout: {}", stdout);
    assert!(stdout.contains("query-database"), "stdout: {}", stdout);
    assert!(stdout.contains("update-page"), "stdout: {}", stdout);
}

#[test]
fn no_command_exits_zero_with_usage_on_stdout() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout: {}", stdout);
}

#[test]
fn update_page_without_properties_is_reported_not_crashed() {
    // Fails in the handler before token loading or any remote call
    let output = run(&["update-page", "abc123"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error[validation.missing_argument]"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn malformed_filter_is_reported_before_any_remote_call() {
    // No NOTION_TOKEN in the environment: a token or network error would
    // surface under a different code, so this proves the filter is parsed
    // first
    let output = run(&["query-database", "abc123", "--filter", "{not json"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error[validation.invalid_json]"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn missing_token_is_a_reported_configuration_error() {
    let output = run(&["test"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error[config.missing_token]"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("hint: "), "stderr: {}", stderr);
}
