//! hostprobe - verify the state of remote integration-test hosts

use std::process::ExitCode;

use clap::Parser;
use hostprobe::cli::Cli;
use hostprobe::output::json;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "HOSTPROBE_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            match json_mode.then(|| json::format_error(&message)) {
                Some(Ok(body)) => println!("{body}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
