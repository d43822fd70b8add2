//! Command implementations

pub mod artifact;
pub mod checkpoint;
pub mod exec;
pub mod host;
pub mod hosts;
pub mod installed;
pub mod vendored;

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::CommandResult;
use crate::output::json;

/// Exit code for a boolean check.
fn check_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print per-host results; succeed only if every host succeeded.
fn report_results(app: &AppContext, results: &[CommandResult]) -> Result<ExitCode> {
    if app.is_json() {
        json::print(results)?;
    } else {
        for result in results {
            app.output.command_result(result);
        }
    }
    Ok(check_code(results.iter().all(CommandResult::success)))
}
