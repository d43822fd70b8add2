//! `hostprobe installed`: plugin presence and version checks.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::output::json;

#[derive(Args)]
pub struct InstalledArgs {
    /// Plugin name, matched exactly
    pub name: String,

    /// Require exactly this version
    #[arg(long)]
    pub version: Option<String>,

    /// Print every installed version instead of checking one
    #[arg(long, conflicts_with = "version")]
    pub versions: bool,

    /// Host to inspect
    #[arg(long, short = 'H')]
    pub host: String,
}

#[derive(Serialize)]
struct InstalledReport<'a> {
    host: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    versions: Option<&'a [String]>,
}

/// # Errors
///
/// Returns an error only if JSON output fails.
pub async fn run(app: &AppContext, args: &InstalledArgs) -> Result<ExitCode> {
    let host = app.host(&args.host);
    let introspector = app.introspector();

    let (installed, versions) = if args.versions {
        let versions = introspector.installed_versions(&host, &args.name).await;
        (!versions.is_empty(), Some(versions))
    } else {
        let installed = introspector
            .is_installed(&host, &args.name, args.version.as_deref())
            .await;
        (installed, None)
    };

    if app.is_json() {
        json::print(&InstalledReport {
            host: &host.name,
            name: &args.name,
            version: args.version.as_deref(),
            installed,
            versions: versions.as_deref(),
        })?;
    } else {
        let label = match &args.version {
            Some(v) => format!("{} ({v}) on {host}", args.name),
            None => format!("{} on {host}", args.name),
        };
        app.output.check(installed, &label);
        for v in versions.iter().flatten() {
            app.output.kv("version", v);
        }
    }
    Ok(super::check_code(installed))
}
