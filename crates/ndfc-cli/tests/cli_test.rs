//! Integration tests for the `ndfc` binary.
//!
//! These validate argument parsing, help output, and pre-network failure
//! paths -- all without a live controller or an interactive terminal.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `ndfc` binary with env isolation.
fn ndfc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ndfc");
    cmd.env_remove("NDFC_HOST")
        .env_remove("NDFC_USERNAME")
        .env_remove("NDFC_PASSWORD")
        .env_remove("NDFC_DOMAIN")
        .env_remove("NDFC_VERIFY_TLS")
        .env_remove("DEFAULT_FABRIC");
    cmd
}

/// Flags for everything except the host, so no prompt is ever reached.
const PARAMS: [&str; 10] = [
    "--fabric",
    "Prod",
    "--username",
    "admin",
    "--password",
    "secret",
    "--display-name",
    "Prod-Net",
    "--new-display-name",
    "",
];

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    ndfc_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("display name")
            .and(predicate::str::contains("--fabric"))
            .and(predicate::str::contains("--new-display-name")),
    );
}

#[test]
fn test_version_flag() {
    ndfc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ndfc"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    ndfc_cmd().arg("--no-such-flag").assert().failure();
}

// ── Pre-network failure paths ───────────────────────────────────────

#[test]
fn test_invalid_host_fails_with_exit_code_1() {
    let assert = ndfc_cmd()
        .args(["--host", "https://["])
        .args(PARAMS)
        .assert()
        .failure()
        .code(1);
    assert.stderr(predicate::str::contains("host"));
}

#[test]
fn test_host_can_come_from_the_environment() {
    // Same validation failure, but the host arrives via NDFC_HOST.
    ndfc_cmd()
        .env("NDFC_HOST", "https://[")
        .args(PARAMS)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("host"));
}

#[test]
fn test_invalid_timeout_is_a_usage_error() {
    ndfc_cmd()
        .args(["--timeout", "soon"])
        .args(PARAMS)
        .assert()
        .failure();
}
