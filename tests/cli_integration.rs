//! Black-box tests of the launcher binary: environment contract, argument
//! forwarding, stream passthrough, and exit-code propagation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn launcher() -> Command {
    let mut cmd = Command::cargo_bin("discogs-launch").unwrap();
    cmd.env_remove("DISCOGS_TOKEN").env_remove("DISCOGS_LIST");
    cmd
}

fn stub_program(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_env_credentials_reach_the_external_program() {
    let temp_dir = TempDir::new().unwrap();
    let args_file = temp_dir.path().join("args.txt");
    let stub = stub_program(
        temp_dir.path(),
        "record_args",
        &format!("printf '%s\\n' \"$@\" > {}", args_file.display()),
    );

    launcher()
        .env("DISCOGS_TOKEN", "abc123")
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg(&stub)
        .assert()
        .success();

    let recorded = fs::read_to_string(&args_file).unwrap();
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        args,
        vec![
            "--alerter-type",
            "TELEGRAM",
            "-dt",
            "abc123",
            "--list-id",
            "999999"
        ]
    );
}

#[test]
fn test_missing_token_fails_before_spawn() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join("spawned");
    let stub = stub_program(
        temp_dir.path(),
        "marker",
        &format!("touch {}", marker.display()),
    );

    launcher()
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg(&stub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));

    assert!(!marker.exists(), "external program must not be spawned");
}

#[test]
fn test_missing_list_id_fails_before_spawn() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join("spawned");
    let stub = stub_program(
        temp_dir.path(),
        "marker",
        &format!("touch {}", marker.display()),
    );

    launcher()
        .env("DISCOGS_TOKEN", "abc123")
        .arg("--program")
        .arg(&stub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list-id"));

    assert!(!marker.exists(), "external program must not be spawned");
}

#[test]
fn test_missing_program_exits_127() {
    launcher()
        .env("DISCOGS_TOKEN", "abc123")
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg("/definitely/not/here/discogs_alert")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_sentinel_exit_code_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let stub = stub_program(temp_dir.path(), "exit_42", "exit 42");

    launcher()
        .env("DISCOGS_TOKEN", "abc123")
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg(&stub)
        .assert()
        .code(42);
}

#[test]
fn test_child_streams_pass_through_unmodified() {
    let temp_dir = TempDir::new().unwrap();
    let stub = stub_program(
        temp_dir.path(),
        "noisy",
        "echo stdout-sentinel\necho stderr-sentinel >&2",
    );

    launcher()
        .env("DISCOGS_TOKEN", "abc123")
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg(&stub)
        .assert()
        .success()
        .stdout(predicate::str::contains("stdout-sentinel"))
        .stderr(predicate::str::contains("stderr-sentinel"));
}

#[test]
fn test_sigterm_is_relayed_to_the_child() {
    let temp_dir = TempDir::new().unwrap();
    let ready = temp_dir.path().join("ready");
    let marker = temp_dir.path().join("got-term");

    // The stub installs the trap before reporting readiness; on TERM it
    // records the signal and re-raises it so it dies by SIGTERM.
    let stub = stub_program(
        temp_dir.path(),
        "long_runner",
        &format!(
            "trap 'touch {marker}; trap - TERM; kill -TERM $$' TERM\n\
             sleep 30 &\n\
             touch {ready}\n\
             wait $!",
            marker = marker.display(),
            ready = ready.display()
        ),
    );

    let mut launched = StdCommand::new(env!("CARGO_BIN_EXE_discogs-launch"))
        .env("DISCOGS_TOKEN", "abc123")
        .env("DISCOGS_LIST", "999999")
        .arg("--program")
        .arg(&stub)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while !ready.exists() {
        assert!(Instant::now() < deadline, "stub never started");
        thread::sleep(Duration::from_millis(20));
    }

    let kill_status = StdCommand::new("kill")
        .args(["-TERM", &launched.id().to_string()])
        .status()
        .unwrap();
    assert!(kill_status.success());

    let status = launched.wait().unwrap();
    assert_eq!(status.code(), Some(143));
    assert!(marker.exists(), "child never received the relayed SIGTERM");
}

#[test]
fn test_empty_token_rejected_with_usage_error() {
    launcher()
        .env("DISCOGS_TOKEN", "   ")
        .env("DISCOGS_LIST", "999999")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("token"));
}
