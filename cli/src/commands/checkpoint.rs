//! `hostprobe snapshot` / `hostprobe restore`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::Host;

#[derive(Args)]
pub struct CheckpointArgs {
    /// Target host (repeatable; default: every configured host)
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,
}

/// # Errors
///
/// Returns the first checkpoint failure; later hosts are not attempted.
pub async fn snapshot(app: &AppContext, args: &CheckpointArgs) -> Result<ExitCode> {
    for host in targets(app, args)? {
        app.checkpoint.snapshot(&host).await?;
        app.output.check(true, &format!("snapshot saved for {host}"));
    }
    Ok(ExitCode::SUCCESS)
}

/// # Errors
///
/// Returns the first checkpoint failure; later hosts are not attempted.
pub async fn restore(app: &AppContext, args: &CheckpointArgs) -> Result<ExitCode> {
    for host in targets(app, args)? {
        app.checkpoint.restore(&host).await?;
        app.output.check(true, &format!("{host} restored"));
    }
    Ok(ExitCode::SUCCESS)
}

fn targets(app: &AppContext, args: &CheckpointArgs) -> Result<Vec<Host>> {
    let selected = app.hosts(&args.hosts);
    Ok(app.executor.resolve(&selected)?.to_vec())
}
