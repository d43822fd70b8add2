//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;

/// Verify the state of remote integration-test hosts
#[derive(Parser)]
#[command(
    name = "hostprobe",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config file (default: $HOSTPROBE_CONFIG or ~/.hostprobe/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a shell command on hosts, one after another
    Exec(commands::exec::ExecArgs),

    /// Check whether a plugin is installed
    Installed(commands::installed::InstalledArgs),

    /// Check whether a package is vendored in the bundled runtime
    Vendored(commands::vendored::VendoredArgs),

    /// Print the staged path of a packaged build
    ArtifactPath(commands::artifact::ArtifactPathArgs),

    /// Print the SHA-256 of a local artifact
    Digest(commands::artifact::DigestArgs),

    /// Save a host state snapshot
    Snapshot(commands::checkpoint::CheckpointArgs),

    /// Restore hosts to their latest snapshot
    Restore(commands::checkpoint::CheckpointArgs),

    /// Start or stop a service
    #[command(subcommand)]
    Service(commands::host::ServiceCommand),

    /// Download a file on hosts
    Download(commands::host::DownloadArgs),

    /// Delete a path on hosts
    Delete(commands::host::DeleteArgs),

    /// Rewrite a pattern in the product's Gemfile
    ReplaceInGemfile(commands::host::ReplaceArgs),

    /// List configured hosts
    Hosts,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command
    /// fails outright. Negative check results are reported via the exit code.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            config,
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let flags = OutputFlags {
            no_color,
            quiet,
            json,
        };
        let app = AppContext::new(&flags, &YamlConfigStore::new(config))?;

        match command {
            Command::Exec(args) => commands::exec::run(&app, &args).await,
            Command::Installed(args) => commands::installed::run(&app, &args).await,
            Command::Vendored(args) => commands::vendored::run(&app, &args).await,
            Command::ArtifactPath(args) => commands::artifact::path(&app, &args),
            Command::Digest(args) => commands::artifact::digest(&app, &args),
            Command::Snapshot(args) => commands::checkpoint::snapshot(&app, &args).await,
            Command::Restore(args) => commands::checkpoint::restore(&app, &args).await,
            Command::Service(cmd) => commands::host::service(&app, &cmd).await,
            Command::Download(args) => commands::host::download(&app, &args).await,
            Command::Delete(args) => commands::host::delete(&app, &args).await,
            Command::ReplaceInGemfile(args) => commands::host::replace(&app, &args).await,
            Command::Hosts => commands::hosts::run(&app),
        }
    }
}
