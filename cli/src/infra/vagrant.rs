//! Infrastructure implementation of the `CheckpointService` port using
//! Vagrant snapshots.
//!
//! Each host keeps a single named snapshot; saving again replaces it, so
//! restore always returns to the most recent save.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CheckpointService, CommandRunner};
use crate::domain::Host;

pub struct VagrantCheckpoint<R: CommandRunner> {
    runner: R,
    snapshot_name: String,
    timeout: Duration,
}

impl<R: CommandRunner> VagrantCheckpoint<R> {
    pub fn new(runner: R, snapshot_name: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            snapshot_name: snapshot_name.into(),
            timeout,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn vagrant(&self, args: &[&str], what: &str) -> Result<()> {
        let output = self
            .runner
            .run_with_timeout("vagrant", args, self.timeout)
            .await
            .with_context(|| format!("vagrant {what}"))?;
        if !output.status.success() {
            anyhow::bail!(
                "vagrant {what} failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

impl<R: CommandRunner> CheckpointService for VagrantCheckpoint<R> {
    async fn snapshot(&self, host: &Host) -> Result<()> {
        self.vagrant(
            &["snapshot", "save", "--force", &host.name, &self.snapshot_name],
            "snapshot save",
        )
        .await
    }

    async fn restore(&self, host: &Host) -> Result<()> {
        self.vagrant(
            &["snapshot", "restore", &host.name, &self.snapshot_name],
            "snapshot restore",
        )
        .await
    }
}
