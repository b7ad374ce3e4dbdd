//! Integration tests for the `envoyctl` binary.
//!
//! These validate argument parsing, help output, and error handling —
//! all without requiring a live gateway.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `envoyctl` binary with env isolation.
///
/// Clears all `ENVOY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn envoyctl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("envoyctl");
    cmd.env("HOME", "/tmp/envoyctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/envoyctl-test-nonexistent")
        .env_remove("ENVOY_PROFILE")
        .env_remove("ENVOY_GATEWAY")
        .env_remove("ENVOY_SESSION_PORTAL")
        .env_remove("ENVOY_AUTH_PORTAL")
        .env_remove("ENVOY_USERNAME")
        .env_remove("ENVOY_SERIAL")
        .env_remove("ENVOY_PASSWORD")
        .env_remove("ENVOY_OUTPUT")
        .env_remove("ENVOY_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = envoyctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    envoyctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Envoy gateway")
            .and(predicate::str::contains("status"))
            .and(predicate::str::contains("meters"))
            .and(predicate::str::contains("readings"))
            .and(predicate::str::contains("inverters")),
    );
}

#[test]
fn test_version_flag() {
    envoyctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envoyctl"));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_missing_username_fails_before_any_prompt() {
    let output = envoyctl_cmd().arg("status").output().unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("username"),
        "Expected 'username' in output:\n{text}"
    );
}

#[test]
fn test_missing_serial_is_reported() {
    let output = envoyctl_cmd()
        .args(["status", "--username", "owner@example.com"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("serial"),
        "Expected 'serial' in output:\n{text}"
    );
}

#[test]
fn test_invalid_gateway_url_is_a_usage_error() {
    let output = envoyctl_cmd()
        .args([
            "status",
            "--username",
            "owner@example.com",
            "--serial",
            "122107001234",
            "--gateway",
            "not a url",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("invalid URL"),
        "Expected 'invalid URL' in output:\n{text}"
    );
}
