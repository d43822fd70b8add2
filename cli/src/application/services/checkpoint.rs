//! Application service: host state checkpoints.
//!
//! Pass-through to a [`CheckpointService`]; errors are propagated unchanged.

use anyhow::Result;

use crate::application::ports::CheckpointService;
use crate::domain::Host;

pub struct HostCheckpoint<C: CheckpointService> {
    service: C,
}

impl<C: CheckpointService> HostCheckpoint<C> {
    pub fn new(service: C) -> Self {
        Self { service }
    }

    /// # Errors
    ///
    /// Returns whatever the checkpoint service reports.
    pub async fn snapshot(&self, host: &Host) -> Result<()> {
        tracing::info!(host = %host, "saving host snapshot");
        self.service.snapshot(host).await
    }

    /// # Errors
    ///
    /// Returns whatever the checkpoint service reports, including a missing
    /// snapshot.
    pub async fn restore(&self, host: &Host) -> Result<()> {
        tracing::info!(host = %host, "restoring host snapshot");
        self.service.restore(host).await
    }
}
