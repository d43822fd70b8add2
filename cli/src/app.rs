//! Application context: unified state passed to every command handler.
//!
//! `AppContext` wires the production adapters (ssh transport, Vagrant
//! checkpoints) to the application services once, in `Cli::run()`.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::application::services::{
    Executor, HostCheckpoint, HostOps, PackageIntrospector, VendorScanner,
};
use crate::domain::{HarnessConfig, Host};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::ssh::SshShell;
use crate::infra::vagrant::VagrantCheckpoint;
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Production remote shell.
pub type ProdShell = SshShell<TokioCommandRunner>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Loaded harness configuration.
    pub config: HarnessConfig,
    /// Serial command executor over ssh.
    pub executor: Executor<ProdShell>,
    /// Snapshot/restore façade over Vagrant.
    pub checkpoint: HostCheckpoint<VagrantCheckpoint<TokioCommandRunner>>,
}

impl AppContext {
    /// Construct an `AppContext` from output flags and a config store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn new(flags: &OutputFlags, store: &impl ConfigStore) -> Result<Self> {
        let config = store.load()?;

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let runner = TokioCommandRunner::new(Duration::from_secs(config.ssh.timeout_secs));
        let executor = Executor::from_config(SshShell::new(runner, &config.ssh), &config);
        let checkpoint = HostCheckpoint::new(VagrantCheckpoint::new(
            TokioCommandRunner::default(),
            config.checkpoint.snapshot_name.clone(),
            Duration::from_secs(config.checkpoint.timeout_secs),
        ));

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config,
            executor,
            checkpoint,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Resolve `--host` values against the configured hosts.
    #[must_use]
    pub fn hosts(&self, names: &[String]) -> Vec<Host> {
        names.iter().map(|n| self.config.resolve_host(n)).collect()
    }

    #[must_use]
    pub fn host(&self, name: &str) -> Host {
        self.config.resolve_host(name)
    }

    #[must_use]
    pub fn introspector(&self) -> PackageIntrospector<'_, ProdShell> {
        PackageIntrospector::new(&self.executor, &self.config.plugin_tool)
    }

    #[must_use]
    pub fn scanner(&self) -> VendorScanner<'_, ProdShell> {
        VendorScanner::new(&self.executor, &self.config.vendor)
    }

    #[must_use]
    pub fn host_ops(&self) -> HostOps<'_, ProdShell> {
        HostOps::new(&self.executor, self.config.service_manager)
    }
}
