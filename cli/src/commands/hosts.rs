//! `hostprobe hosts`: list configured hosts.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// # Errors
///
/// Returns an error only if JSON output fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    if app.is_json() {
        json::print(&app.config.hosts)?;
    } else if app.config.hosts.is_empty() {
        app.output.warn("no hosts configured");
    } else {
        for host in &app.config.hosts {
            app.output.kv(&host.name, &host.destination());
        }
    }
    Ok(ExitCode::SUCCESS)
}
