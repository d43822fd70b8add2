//! Executor: serial dispatch, host resolution, env prefixing, failure capture.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use hostprobe::application::services::Executor;
use hostprobe::domain::{Command, ExecError, HarnessConfig, Host};

use crate::mocks::{RecordingShell, fail_output, hosts, ok_output};

fn command(script: &str) -> Command {
    Command::new(script).expect("valid command")
}

#[tokio::test]
async fn test_run_visits_each_host_once_in_listed_order() {
    let exec = Executor::new(RecordingShell::new(), Vec::new());
    let targets = hosts(&["c", "a", "b"]);

    exec.run(&command("uptime"), &targets).await.expect("runs");

    let visited: Vec<String> = exec.shell().calls().into_iter().map(|(h, _)| h).collect();
    assert_eq!(visited, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_run_returns_last_hosts_result() {
    let shell = RecordingShell::new()
        .respond_on("a", "hostname", ok_output(b"a\n"))
        .respond_on("b", "hostname", ok_output(b"b\n"));
    let exec = Executor::new(shell, Vec::new());

    let result = exec
        .run(&command("hostname"), &hosts(&["a", "b"]))
        .await
        .expect("runs");

    assert_eq!(result.host, "b");
    assert_eq!(result.stdout, "b\n");
}

#[tokio::test]
async fn test_empty_selection_uses_known_hosts() {
    let exec = Executor::new(RecordingShell::new(), hosts(&["debian", "centos"]));

    let results = exec.run_each(&command("true"), &[]).await.expect("runs");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].host, "debian");
    assert_eq!(results[1].host, "centos");
}

#[tokio::test]
async fn test_no_hosts_at_all_fails_fast() {
    let exec = Executor::new(RecordingShell::new(), Vec::new());

    let err = exec.run(&command("true"), &[]).await.unwrap_err();

    assert_eq!(err, ExecError::NoHosts);
    assert!(exec.shell().calls().is_empty());
}

#[tokio::test]
async fn test_default_env_prefixes_every_command() {
    let exec = Executor::from_config(
        RecordingShell::new(),
        &HarnessConfig {
            hosts: hosts(&["a", "b"]),
            ..HarnessConfig::default()
        },
    );

    exec.run(&command("bin/logstash-plugin list"), &[])
        .await
        .expect("runs");

    for script in exec.shell().scripts() {
        assert_eq!(script, "JARS_SKIP='true' bin/logstash-plugin list");
    }
}

#[tokio::test]
async fn test_non_zero_exit_does_not_abort_batch() {
    let shell = RecordingShell::new().respond_on("a", "check", fail_output(3, b"boom"));
    let exec = Executor::new(shell, Vec::new());

    let results = exec
        .run_each(&command("check"), &hosts(&["a", "b"]))
        .await
        .expect("runs");

    assert_eq!(results[0].exit_code, Some(3));
    assert_eq!(results[0].stderr, "boom");
    assert!(results[1].success());
}

#[tokio::test]
async fn test_transport_failure_becomes_result_without_exit_code() {
    let shell = RecordingShell::new().unreachable("a", "cannot reach a");
    let exec = Executor::new(shell, Vec::new());

    let results = exec
        .run_each(&command("true"), &hosts(&["a", "b"]))
        .await
        .expect("transport errors are not raised");

    assert_eq!(results[0].exit_code, None);
    assert!(results[0].stderr.contains("cannot reach a"));
    assert!(!results[0].success());
    assert!(results[1].success());
}

#[test]
fn test_in_install_path_joins_root_and_script() {
    let exec = Executor::new(RecordingShell::new(), Vec::new())
        .with_install_root("/usr/share/logstash/");

    let cmd = exec.in_install_path("/bin/logstash --version").expect("valid");

    assert_eq!(cmd.script(), "/usr/share/logstash/bin/logstash --version");
    assert!(exec.in_install_path("  ").is_err());
}

#[tokio::test]
async fn test_ad_hoc_host_is_addressed_by_name() {
    let exec = Executor::new(RecordingShell::new(), hosts(&["configured"]));

    exec.run(&command("true"), &[Host::new("elsewhere")])
        .await
        .expect("runs");

    assert_eq!(exec.shell().calls()[0].0, "elsewhere");
}
