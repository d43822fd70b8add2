//! Application service: command dispatch across hosts.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Hosts are visited strictly one after another, in the order given.

use std::process::Output;

use serde::Serialize;

use crate::application::ports::RemoteShell;
use crate::domain::{Command, CommandError, ExecError, HarnessConfig, Host};

/// Captured output of one command on one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub host: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the host could not be reached or the process was killed.
    pub exit_code: Option<i32>,
}

impl CommandResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn from_output(host: &Host, output: &Output) -> Self {
        Self {
            host: host.name.clone(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }

    fn unreachable(host: &Host, err: &anyhow::Error) -> Self {
        Self {
            host: host.name.clone(),
            stdout: String::new(),
            stderr: format!("{err:#}"),
            exit_code: None,
        }
    }
}

/// Runs [`Command`]s on hosts through a [`RemoteShell`].
///
/// Every command is prefixed with the default environment overrides, so
/// for example `JARS_SKIP='true'` reaches each remote invocation.
pub struct Executor<S: RemoteShell> {
    shell: S,
    hosts: Vec<Host>,
    default_env: Vec<(String, String)>,
    install_root: String,
}

impl<S: RemoteShell> Executor<S> {
    /// Executor over `hosts` with no default overrides, rooted at `/`.
    pub fn new(shell: S, hosts: Vec<Host>) -> Self {
        Self {
            shell,
            hosts,
            default_env: Vec::new(),
            install_root: "/".to_string(),
        }
    }

    pub fn from_config(shell: S, config: &HarnessConfig) -> Self {
        Self::new(shell, config.hosts.clone())
            .with_default_env(config.default_env())
            .with_install_root(config.install_root.clone())
    }

    #[must_use]
    pub fn with_default_env(mut self, env: Vec<(String, String)>) -> Self {
        self.default_env = env;
        self
    }

    #[must_use]
    pub fn with_install_root(mut self, root: impl Into<String>) -> Self {
        self.install_root = root.into();
        self
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn install_root(&self) -> &str {
        &self.install_root
    }

    /// An empty selection means every known host.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::NoHosts`] when the selection is empty and no
    /// hosts are known.
    pub fn resolve<'a>(&'a self, hosts: &'a [Host]) -> Result<&'a [Host], ExecError> {
        let resolved = if hosts.is_empty() { &self.hosts[..] } else { hosts };
        if resolved.is_empty() {
            return Err(ExecError::NoHosts);
        }
        Ok(resolved)
    }

    /// Run `command` on each host in turn and return every result.
    ///
    /// A failing host does not stop the batch.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::NoHosts`] if there is nothing to run on.
    pub async fn run_each(
        &self,
        command: &Command,
        hosts: &[Host],
    ) -> Result<Vec<CommandResult>, ExecError> {
        let targets = self.resolve(hosts)?;
        let mut results = Vec::with_capacity(targets.len());
        for host in targets {
            results.push(self.run_on(command, host).await);
        }
        Ok(results)
    }

    /// Run `command` on each host in turn and return the last result.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::NoHosts`] if there is nothing to run on.
    pub async fn run(&self, command: &Command, hosts: &[Host]) -> Result<CommandResult, ExecError> {
        self.run_each(command, hosts)
            .await?
            .pop()
            .ok_or(ExecError::NoHosts)
    }

    /// Run `command` on a single host. Transport failures come back as a
    /// result without an exit code.
    pub async fn run_on(&self, command: &Command, host: &Host) -> CommandResult {
        let line = command.render_with(&self.default_env);
        tracing::debug!(host = %host, command = %line, "running remote command");
        match self.shell.exec(host, &line).await {
            Ok(output) => {
                let result = CommandResult::from_output(host, &output);
                if !result.success() {
                    tracing::debug!(host = %host, exit_code = ?result.exit_code, "remote command failed");
                }
                result
            }
            Err(e) => {
                tracing::warn!(host = %host, error = %format!("{e:#}"), "host unreachable");
                CommandResult::unreachable(host, &e)
            }
        }
    }

    /// Command running `script` relative to the install root.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Empty`] if `script` is blank.
    pub fn in_install_path(&self, script: &str) -> Result<Command, CommandError> {
        if script.trim().is_empty() {
            return Err(CommandError::Empty);
        }
        Command::new(format!(
            "{}/{}",
            self.install_root.trim_end_matches('/'),
            script.trim_start_matches('/')
        ))
    }
}
