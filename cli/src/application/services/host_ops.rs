//! Application service: routine host mutations used between test cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;

use crate::application::ports::RemoteShell;
use crate::application::services::executor::{CommandResult, Executor};
use crate::domain::command::shell_quote;
use crate::domain::{Command, Host, ServiceAction, ServiceManager};

pub struct HostOps<'a, S: RemoteShell> {
    executor: &'a Executor<S>,
    service_manager: ServiceManager,
}

impl<'a, S: RemoteShell> HostOps<'a, S> {
    pub fn new(executor: &'a Executor<S>, service_manager: ServiceManager) -> Self {
        Self {
            executor,
            service_manager,
        }
    }

    /// # Errors
    ///
    /// Fails on an empty service name or when there are no hosts.
    pub async fn start_service(&self, service: &str, hosts: &[Host]) -> Result<CommandResult> {
        self.service(service, ServiceAction::Start, hosts).await
    }

    /// # Errors
    ///
    /// Fails on an empty service name or when there are no hosts.
    pub async fn stop_service(&self, service: &str, hosts: &[Host]) -> Result<CommandResult> {
        self.service(service, ServiceAction::Stop, hosts).await
    }

    async fn service(
        &self,
        service: &str,
        action: ServiceAction,
        hosts: &[Host],
    ) -> Result<CommandResult> {
        if service.trim().is_empty() {
            anyhow::bail!("service name must not be empty");
        }
        let command = Command::new(self.service_manager.command_line(service, action))?;
        Ok(self.executor.run(&command, hosts).await?)
    }

    /// Rewrite the first match of `pattern` on each line of the product's
    /// `Gemfile`. A `.sedbak` backup is left next to it.
    ///
    /// Both arguments are spliced into a sed expression as-is.
    ///
    /// # Errors
    ///
    /// Fails when there are no hosts.
    pub async fn replace_in_gemfile(
        &self,
        pattern: &str,
        replace: &str,
        hosts: &[Host],
    ) -> Result<CommandResult> {
        let gemfile = format!("{}/Gemfile", self.executor.install_root().trim_end_matches('/'));
        let command = Command::new(format!(
            "sed -i.sedbak 's/{pattern}/{replace}/' {}",
            shell_quote(&gemfile)
        ))?;
        Ok(self.executor.run(&command, hosts).await?)
    }

    /// Run a script that lives under the install root.
    ///
    /// # Errors
    ///
    /// Fails on an empty script or when there are no hosts.
    pub async fn run_in_install_path(&self, script: &str, hosts: &[Host]) -> Result<CommandResult> {
        let command = self.executor.in_install_path(script)?;
        Ok(self.executor.run(&command, hosts).await?)
    }

    /// # Errors
    ///
    /// Fails on empty arguments or when there are no hosts.
    pub async fn download(&self, from: &str, to: &str, hosts: &[Host]) -> Result<CommandResult> {
        if from.is_empty() || to.is_empty() {
            anyhow::bail!("download needs both a source URL and a destination path");
        }
        let command = Command::new(format!("wget {} -O {}", shell_quote(from), shell_quote(to)))?;
        Ok(self.executor.run(&command, hosts).await?)
    }

    /// # Errors
    ///
    /// Fails on an empty path or when there are no hosts.
    pub async fn delete_file(&self, path: &str, hosts: &[Host]) -> Result<CommandResult> {
        if path.trim().is_empty() {
            anyhow::bail!("refusing to delete an empty path");
        }
        let command = Command::new(format!("rm -rf {}", shell_quote(path)))?;
        Ok(self.executor.run(&command, hosts).await?)
    }
}
