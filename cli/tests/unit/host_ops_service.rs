//! Exact remote command lines for host mutations.

#![allow(clippy::expect_used)]

use hostprobe::application::services::{Executor, HostOps};
use hostprobe::domain::ServiceManager;

use crate::mocks::{RecordingShell, fail_output, hosts};

fn executor(shell: RecordingShell) -> Executor<RecordingShell> {
    Executor::new(shell, hosts(&["debian"])).with_install_root("/usr/share/logstash")
}

#[tokio::test]
async fn test_systemd_start_and_stop() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    ops.start_service("logstash", &[]).await.expect("start");
    ops.stop_service("logstash", &[]).await.expect("stop");

    assert_eq!(
        exec.shell().scripts(),
        vec!["systemctl start 'logstash'", "systemctl stop 'logstash'"]
    );
}

#[tokio::test]
async fn test_sysv_service_line() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Sysv);

    ops.start_service("logstash", &[]).await.expect("start");

    assert_eq!(exec.shell().scripts(), vec!["service 'logstash' start"]);
}

#[tokio::test]
async fn test_empty_service_name_is_rejected_before_dispatch() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    assert!(ops.start_service(" ", &[]).await.is_err());
    assert!(exec.shell().calls().is_empty());
}

#[tokio::test]
async fn test_replace_in_gemfile_edits_install_root_gemfile() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    ops.replace_in_gemfile("gem \"foo\"", "gem \"foo\", \"1.0\"", &[])
        .await
        .expect("sed");

    assert_eq!(
        exec.shell().scripts(),
        vec![
            "sed -i.sedbak 's/gem \"foo\"/gem \"foo\", \"1.0\"/' '/usr/share/logstash/Gemfile'"
        ]
    );
}

#[tokio::test]
async fn test_download_and_delete() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    ops.download("https://example.org/a.gem", "/tmp/a.gem", &[])
        .await
        .expect("wget");
    ops.delete_file("/tmp/a.gem", &[]).await.expect("rm");

    assert_eq!(
        exec.shell().scripts(),
        vec![
            "wget 'https://example.org/a.gem' -O '/tmp/a.gem'",
            "rm -rf '/tmp/a.gem'"
        ]
    );
}

#[tokio::test]
async fn test_delete_refuses_empty_path() {
    let exec = executor(RecordingShell::new());
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    assert!(ops.delete_file("", &[]).await.is_err());
    assert!(exec.shell().calls().is_empty());
}

#[tokio::test]
async fn test_run_in_install_path_surfaces_exit_status() {
    let exec = executor(RecordingShell::new().respond("bin/logstash", fail_output(2, b"")));
    let ops = HostOps::new(&exec, ServiceManager::Systemd);

    let result = ops
        .run_in_install_path("bin/logstash -t", &[])
        .await
        .expect("dispatched");

    assert_eq!(exec.shell().scripts(), vec!["/usr/share/logstash/bin/logstash -t"]);
    assert_eq!(result.exit_code, Some(2));
}
