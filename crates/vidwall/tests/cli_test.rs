//! Integration tests for the `vidwall` binary.
//!
//! Argument parsing, help output, and error exit codes — all without a
//! live device.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `vidwall` binary with env isolation.
fn vidwall_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("vidwall").unwrap();
    cmd.env_remove("VIDWALL_URL").env_remove("VIDWALL_TIMEOUT");
    cmd
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_usage() {
    vidwall_cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_subcommands() {
    vidwall_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sources"))
        .stdout(predicate::str::contains("destinations"))
        .stdout(predicate::str::contains("content"));
}

// ── Error handling ──────────────────────────────────────────────────

#[test]
fn test_missing_url_is_usage_error() {
    vidwall_cmd()
        .arg("sources")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No device URL"));
}

#[test]
fn test_invalid_url_is_usage_error() {
    vidwall_cmd()
        .args(["--url", "not a url", "sources"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid device URL"));
}

#[test]
fn test_content_requires_screen_id() {
    vidwall_cmd()
        .args(["--url", "http://127.0.0.1:9999/", "content"])
        .assert()
        .code(2);
}
