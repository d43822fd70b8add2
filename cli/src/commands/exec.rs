//! `hostprobe exec`: run a shell command on hosts, serially.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::domain::Command;
use crate::domain::command::shell_quote;

/// Arguments for the exec command.
#[derive(Args)]
pub struct ExecArgs {
    /// Target host (repeatable; default: every configured host)
    #[arg(long = "host", short = 'H')]
    pub hosts: Vec<String>,

    /// Extra environment override, KEY=VALUE (repeatable)
    #[arg(long = "env", short = 'e', value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Resolve the command relative to the install root
    #[arg(long)]
    pub in_install_path: bool,

    /// Command line to run. A single argument is sent verbatim, so pipes
    /// and redirections must be passed as one quoted string; with several
    /// arguments every word after the first is quoted.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Run the command on each host in order and print every result.
///
/// # Errors
///
/// Returns an error for an empty command, a malformed `--env`, or when no
/// hosts are available.
pub async fn run(app: &AppContext, args: &ExecArgs) -> Result<ExitCode> {
    let script = script_from_words(&args.command);
    let mut command = if args.in_install_path {
        app.executor.in_install_path(&script)?
    } else {
        Command::new(script)?
    };
    for pair in &args.env {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("--env expects KEY=VALUE, got '{pair}'"))?;
        command = command.with_env(key, value)?;
    }

    let hosts = app.hosts(&args.hosts);
    let results = app.executor.run_each(&command, &hosts).await?;
    super::report_results(app, &results)
}

/// Join argv words into one shell line, keeping each word after the first
/// intact on the remote side.
#[must_use]
pub fn script_from_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [single] => single.clone(),
        [program, rest @ ..] => {
            let mut line = program.clone();
            for word in rest {
                line.push(' ');
                line.push_str(&shell_quote(word));
            }
            line
        }
    }
}
