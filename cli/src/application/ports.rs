//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{HarnessConfig, Host};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts local process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Remote Shell Port ─────────────────────────────────────────────────────────

/// Runs one shell line on one host.
///
/// A remote non-zero exit is a successful call carrying that status. `Err`
/// is reserved for failures to reach the host at all.
#[allow(async_fn_in_trait)]
pub trait RemoteShell {
    async fn exec(&self, host: &Host, script: &str) -> Result<Output>;
}

// ── Checkpoint Port ───────────────────────────────────────────────────────────

/// External snapshot/restore capability for host state.
#[allow(async_fn_in_trait)]
pub trait CheckpointService {
    /// Capture the current state of `host`.
    async fn snapshot(&self, host: &Host) -> Result<()>;
    /// Return `host` to its most recent snapshot.
    ///
    /// # Errors
    ///
    /// Implementations report a missing snapshot as an error.
    async fn restore(&self, host: &Host) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the harness configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<HarnessConfig>;
    /// Path the configuration is read from.
    fn path(&self) -> Result<PathBuf>;
}
