//! `SshShell` argument construction and connection-failure mapping.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::process::Output;

use hostprobe::application::ports::RemoteShell;
use hostprobe::application::services::Executor;
use hostprobe::domain::{Command, Host};
use hostprobe::domain::config::SshConfig;
use hostprobe::infra::ssh::SshShell;

use crate::mocks::{RecordingRunner, fail_output, ok_output};

fn vagrant_host() -> Host {
    Host {
        name: "debian".to_string(),
        address: Some("10.0.0.5".to_string()),
        user: Some("vagrant".to_string()),
        port: Some(2222),
    }
}

#[test]
fn test_args_wrap_script_in_sudo() {
    let shell = SshShell::new(RecordingRunner::returning(ok_output(b"")), &SshConfig::default());

    let args = shell.ssh_args(&vagrant_host(), "JARS_SKIP='true' ls");

    assert_eq!(
        args,
        vec![
            "-o",
            "BatchMode=yes",
            "-p",
            "2222",
            "vagrant@10.0.0.5",
            "--",
            r"sudo sh -c 'JARS_SKIP='\''true'\'' ls'",
        ]
    );
}

#[test]
fn test_args_without_sudo_pass_script_verbatim() {
    let config = SshConfig {
        options: vec!["StrictHostKeyChecking=no".to_string()],
        sudo: false,
        ..SshConfig::default()
    };
    let shell = SshShell::new(RecordingRunner::returning(ok_output(b"")), &config);

    let args = shell.ssh_args(&Host::new("centos"), "uptime");

    assert_eq!(
        args,
        vec![
            "-o",
            "BatchMode=yes",
            "-o",
            "StrictHostKeyChecking=no",
            "centos",
            "--",
            "uptime",
        ]
    );
}

#[tokio::test]
async fn test_exec_invokes_ssh_and_passes_remote_status_through() {
    let shell = SshShell::new(
        RecordingRunner::returning(fail_output(1, b"")),
        &SshConfig::default(),
    );

    let output = shell.exec(&Host::new("centos"), "false").await.expect("ran");

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_exit_255_is_a_transport_failure() {
    let shell = SshShell::new(
        RecordingRunner::returning(fail_output(
            255,
            b"ssh: connect to host 10.0.0.5 port 2222: Connection refused",
        )),
        &SshConfig::default(),
    );

    let err = shell.exec(&vagrant_host(), "true").await.unwrap_err();

    assert!(err.to_string().contains("cannot reach vagrant@10.0.0.5"));
    assert!(err.to_string().contains("Connection refused"));
}

#[tokio::test]
async fn test_remote_exit_255_with_output_is_a_result() {
    let shell = SshShell::new(
        RecordingRunner::returning(Output {
            stdout: b"partial\n".to_vec(),
            ..fail_output(255, b"")
        }),
        &SshConfig::default(),
    );
    let exec = Executor::new(shell, Vec::new());
    let command = Command::new("exit 255").expect("valid");

    let result = exec
        .run(&command, &[Host::new("centos")])
        .await
        .expect("runs");

    assert_eq!(result.exit_code, Some(255));
    assert_eq!(result.stdout, "partial\n");
}

#[tokio::test]
async fn test_remote_exit_255_without_ssh_diagnostic_is_a_result() {
    let shell = SshShell::new(
        RecordingRunner::returning(fail_output(255, b"custom failure")),
        &SshConfig::default(),
    );

    let output = shell.exec(&Host::new("centos"), "exit 255").await.expect("ran");

    assert_eq!(output.status.code(), Some(255));
}

#[tokio::test]
async fn test_auth_failure_is_a_transport_failure() {
    let shell = SshShell::new(
        RecordingRunner::returning(fail_output(
            255,
            b"vagrant@10.0.0.5: Permission denied (publickey).",
        )),
        &SshConfig::default(),
    );

    assert!(shell.exec(&vagrant_host(), "true").await.is_err());
}

#[tokio::test]
async fn test_spawn_failure_is_a_transport_failure() {
    let shell = SshShell::new(RecordingRunner::failing(), &SshConfig::default());

    assert!(shell.exec(&Host::new("centos"), "true").await.is_err());
}
