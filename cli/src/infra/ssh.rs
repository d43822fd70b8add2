//! Infrastructure implementation of the `RemoteShell` port over `ssh`.
//!
//! `SshShell<R>` routes every remote command through a `CommandRunner`, so
//! tests can inject a recording runner instead of spawning `ssh`.

use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, RemoteShell};
use crate::domain::Host;
use crate::domain::command::shell_quote;
use crate::domain::config::SshConfig;

/// Exit status `ssh` itself uses for connection failures.
const SSH_CONNECT_FAILURE: i32 = 255;

pub struct SshShell<R: CommandRunner> {
    runner: R,
    options: Vec<String>,
    sudo: bool,
}

impl<R: CommandRunner> SshShell<R> {
    pub fn new(runner: R, config: &SshConfig) -> Self {
        Self {
            runner,
            options: config.options.clone(),
            sudo: config.sudo,
        }
    }

    /// Arguments passed to `ssh` for running `script` on `host`.
    #[must_use]
    pub fn ssh_args(&self, host: &Host, script: &str) -> Vec<String> {
        let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
        for opt in &self.options {
            args.push("-o".to_string());
            args.push(opt.clone());
        }
        if let Some(port) = host.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(host.destination());
        args.push("--".to_string());
        args.push(if self.sudo {
            format!("sudo sh -c {}", shell_quote(script))
        } else {
            script.to_string()
        });
        args
    }
}

impl<R: CommandRunner> RemoteShell for SshShell<R> {
    async fn exec(&self, host: &Host, script: &str) -> Result<Output> {
        let args = self.ssh_args(host, script);
        let argv: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self
            .runner
            .run("ssh", &argv)
            .await
            .with_context(|| format!("ssh {}", host.destination()))?;
        if is_connect_failure(&output) {
            anyhow::bail!(
                "cannot reach {}: {}",
                host.destination(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output)
    }
}

/// `ssh` exits 255 both for its own failures and when the remote command
/// does. Only an exit with no remote output and an ssh diagnostic on stderr
/// counts as a connection failure.
fn is_connect_failure(output: &Output) -> bool {
    if output.status.code() != Some(SSH_CONNECT_FAILURE) || !output.stdout.is_empty() {
        return false;
    }
    String::from_utf8_lossy(&output.stderr).lines().any(|line| {
        line.starts_with("ssh:")
            || line.contains("Permission denied (")
            || line.starts_with("Connection closed by")
            || line.starts_with("kex_exchange_identification:")
    })
}
