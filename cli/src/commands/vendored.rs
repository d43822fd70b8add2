//! `hostprobe vendored`: vendored dependency checks.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::PackageDescriptor;
use crate::output::json;

#[derive(Args)]
pub struct VendoredArgs {
    /// Package name, matched against each descriptor's parsed name
    pub name: String,

    /// Host to inspect
    #[arg(long, short = 'H')]
    pub host: String,

    /// Print the matching descriptors
    #[arg(long)]
    pub list: bool,
}

#[derive(Serialize)]
struct VendoredReport<'a> {
    host: &'a str,
    name: &'a str,
    vendored: bool,
    descriptors: &'a [PackageDescriptor],
}

/// # Errors
///
/// Returns an error only if JSON output fails.
pub async fn run(app: &AppContext, args: &VendoredArgs) -> Result<ExitCode> {
    let host = app.host(&args.host);
    let descriptors = app.scanner().vendored_descriptors(&host, &args.name).await;
    let vendored = !descriptors.is_empty();

    if app.is_json() {
        json::print(&VendoredReport {
            host: &host.name,
            name: &args.name,
            vendored,
            descriptors: &descriptors,
        })?;
    } else {
        app.output
            .check(vendored, &format!("{} vendored on {host}", args.name));
        if args.list {
            for d in &descriptors {
                app.output
                    .kv(&d.name, d.version.as_deref().unwrap_or("(no version)"));
            }
        }
    }
    Ok(super::check_code(vendored))
}
