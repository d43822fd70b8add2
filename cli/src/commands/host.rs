//! Host mutation commands: services, downloads, deletes, Gemfile edits.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;

#[derive(Args)]
pub struct ServiceArgs {
    /// Service name
    pub name: String,

    /// Target host (repeatable; default: every configured host)
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,
}

#[derive(Subcommand)]
pub enum ServiceCommand {
    /// Start a service
    Start(ServiceArgs),
    /// Stop a service
    Stop(ServiceArgs),
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Source URL
    pub from: String,
    /// Destination path on the host
    pub to: String,
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Path to remove recursively
    pub path: String,
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,
}

#[derive(Args)]
pub struct ReplaceArgs {
    /// sed pattern
    pub pattern: String,
    /// Replacement text
    pub replace: String,
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,
}

/// # Errors
///
/// Returns an error when there are no hosts or the name is empty.
pub async fn service(app: &AppContext, cmd: &ServiceCommand) -> Result<ExitCode> {
    let ops = app.host_ops();
    let result = match cmd {
        ServiceCommand::Start(args) => {
            ops.start_service(&args.name, &app.hosts(&args.hosts))
                .await?
        }
        ServiceCommand::Stop(args) => {
            ops.stop_service(&args.name, &app.hosts(&args.hosts))
                .await?
        }
    };
    super::report_results(app, &[result])
}

/// # Errors
///
/// Returns an error when there are no hosts or an argument is empty.
pub async fn download(app: &AppContext, args: &DownloadArgs) -> Result<ExitCode> {
    let result = app
        .host_ops()
        .download(&args.from, &args.to, &app.hosts(&args.hosts))
        .await?;
    super::report_results(app, &[result])
}

/// # Errors
///
/// Returns an error when there are no hosts or the path is empty.
pub async fn delete(app: &AppContext, args: &DeleteArgs) -> Result<ExitCode> {
    let result = app
        .host_ops()
        .delete_file(&args.path, &app.hosts(&args.hosts))
        .await?;
    super::report_results(app, &[result])
}

/// # Errors
///
/// Returns an error when there are no hosts.
pub async fn replace(app: &AppContext, args: &ReplaceArgs) -> Result<ExitCode> {
    let result = app
        .host_ops()
        .replace_in_gemfile(&args.pattern, &args.replace, &app.hosts(&args.hosts))
        .await?;
    super::report_results(app, &[result])
}
