// ABOUTME: Integration tests for the CLI binary
// ABOUTME: Drives the built binary end-to-end, including stdin piping and failure exits

use std::io::Write;
use std::process::{Command, Stdio};

mod common;
use common::TestEnvironment;

fn vellum() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]);
    cmd
}

#[test]
fn test_cli_help() {
    let output = vellum().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vellum"));
    assert!(stdout.contains("--data"));
    assert!(stdout.contains("--separator"));
}

#[test]
fn test_cli_version() {
    let output = vellum().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vellum"));
}

#[test]
fn test_cli_renders_stdin_with_environment() {
    let mut child = vellum()
        .env("USER", "alice")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Hello {{Env.USER}}")
        .unwrap();

    let output = child.wait_with_output().expect("Failed to wait for command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello alice");
}

#[test]
fn test_cli_renders_file_with_values_and_root_key() {
    let env = TestEnvironment::new();
    let values = env.write_values("a:\n  b: 1\n");
    let doc = env.write_document("doc.txt", "{{x.y.a.b}}");

    let output = vellum()
        .args(["-d", values.to_str().unwrap(), "-r", "x.y", doc.as_str()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1");
}

#[test]
fn test_cli_separator_between_documents() {
    let env = TestEnvironment::new();
    let first = env.write_document("one.txt", "first\n");
    let second = env.write_document("two.txt", "second\n");

    let output = vellum()
        .args(["-s", "--- %v ---", first.as_str(), second.as_str()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let expected = format!("--- {first} ---\nfirst\n--- {second} ---\nsecond\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_cli_silent_suppresses_output() {
    let env = TestEnvironment::new();
    let doc = env.write_document("doc.txt", "invisible");

    let output = vellum()
        .args(["-q", doc.as_str()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_missing_input_fails_with_error_line() {
    let output = vellum()
        .arg("/nonexistent/input.txt")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: "));
    assert!(stderr.contains("/nonexistent/input.txt"));
}

#[test]
fn test_cli_malformed_value_file_fails_before_rendering() {
    let env = TestEnvironment::new();
    let values = env.write_values("a: [unterminated");
    let doc = env.write_document("doc.txt", "never printed");

    let output = vellum()
        .args(["-d", values.to_str().unwrap(), doc.as_str()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: "));
}

#[test]
fn test_cli_rejects_separator_without_slot() {
    let env = TestEnvironment::new();
    let doc = env.write_document("doc.txt", "content");

    let output = vellum()
        .args(["-s", "---", doc.as_str()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("separator"));
}

#[test]
fn test_cli_parse_error_exits_nonzero() {
    let env = TestEnvironment::new();
    let doc = env.write_document("bad.txt", "{{#if x}}unclosed");

    let output = vellum().arg(&doc).output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: "));
}
