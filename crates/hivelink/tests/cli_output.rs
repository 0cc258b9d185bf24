//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::io::Write;
use std::process::Command;

/// Write a self-contained config so tests never touch the real tunnel,
/// auth provider, or the user's config hierarchy.
fn write_test_config(dir: &tempfile::TempDir, whoami: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).expect("Failed to create test config");
    writeln!(
        file,
        r#"
[tunnel]
process_name = "nonexistent-tunnel-xyz"
start_command = "true"

[auth]
whoami_command = "{}"
refresh_command = "true"

[probe]
interval_secs = 1
settle_delay_secs = 1
command_timeout_secs = 5

[notifications]
enabled = false
"#,
        whoami
    )
    .expect("Failed to write test config");
    path
}

fn hivelink(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hivelink"))
        .args(args)
        .output()
        .expect("Failed to execute hivelink")
}

#[test]
fn test_run_captures_stdout() {
    let output = hivelink(&["run", "echo hello"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_run_failed_command_exits_nonzero() {
    let output = hivelink(&["run", "exit 7"]);
    assert!(!output.status.success());
}

#[test]
fn test_run_timeout_reports_message() {
    let output = hivelink(&["run", "--timeout-secs", "1", "sleep 10"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("execution timed out"),
        "expected timeout message, got: {}",
        stdout
    );
}

#[test]
fn test_run_background_returns_immediately() {
    let start = std::time::Instant::now();
    let output = hivelink(&["run", "--background", "sleep 5"]);

    assert!(output.status.success());
    assert!(start.elapsed() < std::time::Duration::from_secs(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("started in background"));
}

#[test]
fn test_status_json_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir, "true");

    let output = hivelink(&["--config", config.to_str().unwrap(), "status", "--json"]);

    assert!(
        output.status.success(),
        "status failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not JSON");
    // No such tunnel process, auth command succeeds: partial
    assert_eq!(parsed["health"], "partial");
    assert_eq!(parsed["tunnel_running"], false);
    assert_eq!(parsed["auth_valid"], true);
}

#[test]
fn test_status_human_report_mentions_signals() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_test_config(&dir, "false");

    let output = hivelink(&["--config", config.to_str().unwrap(), "status"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("disconnected"));
    assert!(stdout.contains("tunnel running"));
    assert!(stdout.contains("auth valid"));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let output = hivelink(&["--config", "/nonexistent/hivelink.toml", "status"]);
    assert!(!output.status.success());
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr carries no INFO noise by default (quiet mode)
#[test]
fn test_stdout_is_clean_by_default() {
    let output = hivelink(&["run", "echo clean"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    if !stderr.is_empty() {
        assert!(
            !stderr.contains(r#""level":"INFO""#),
            "Default mode should not emit INFO logs, got: {}",
            stderr
        );
    }
}

#[test]
fn test_verbose_emits_structured_logs_on_stderr() {
    let output = hivelink(&["-v", "run", "echo verbose"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"#),
        "verbose mode should emit JSON events, got: {}",
        stderr
    );
    // User-facing output still on stdout only
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "verbose");
}
