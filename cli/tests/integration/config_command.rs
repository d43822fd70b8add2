//! Integration tests for config loading through the binary.
//!
//! Every test points `HOSTPROBE_CONFIG` or `--config` at a temp path so it
//! never reads `~/.hostprobe/config.yaml`.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hostprobe() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hostprobe"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn temp_config(yaml: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, yaml).expect("write config");
    (dir, path.to_string_lossy().into_owned())
}

#[test]
fn test_hosts_lists_configured_hosts() {
    let (_dir, path) = temp_config(
        "hosts:\n  - name: debian\n    address: 10.0.0.5\n    user: vagrant\n  - name: centos\n",
    );

    hostprobe()
        .arg("hosts")
        .env("HOSTPROBE_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("debian"))
        .stdout(predicate::str::contains("vagrant@10.0.0.5"))
        .stdout(predicate::str::contains("centos"));
}

#[test]
fn test_hosts_json_is_an_array() {
    let (_dir, path) = temp_config("hosts:\n  - name: debian\n    port: 2222\n");

    let output = hostprobe()
        .args(["--json", "--config", path.as_str(), "hosts"])
        .output()
        .expect("runs");

    assert!(output.status.success());
    let hosts: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(hosts[0]["name"], "debian");
    assert_eq!(hosts[0]["port"], 2222);
}

#[test]
fn test_hosts_without_config_warns() {
    hostprobe()
        .arg("hosts")
        .env("HOSTPROBE_CONFIG", "/nonexistent/hostprobe/config.yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("no hosts configured"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    hostprobe()
        .args(["--config", "/nonexistent/hostprobe.yaml", "hosts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_config_is_reported() {
    let (_dir, path) = temp_config("env:\n  NOT-A-KEY: x\n");

    hostprobe()
        .args(["--config", path.as_str(), "hosts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid environment override"));
}

#[test]
fn test_configured_artifact_format_is_used() {
    let (_dir, path) = temp_config("artifacts:\n  location: /staging\n  format: rpm\n  arch: aarch64\n");

    hostprobe()
        .args(["--config", path.as_str(), "artifact-path", "logstash-8.15.0"])
        .assert()
        .success()
        .stdout("/staging/logstash-8.15.0-aarch64.rpm\n");
}
