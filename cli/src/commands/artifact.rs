//! `hostprobe artifact-path` and `hostprobe digest`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::{ArtifactConvention, PackageFormat};
use crate::infra::fs::{artifact_present, sha256_file};
use crate::output::json;

#[derive(Args)]
pub struct ArtifactPathArgs {
    /// Artifact base name, e.g. logstash-8.15.0
    pub filename: String,

    /// Directory holding staged artifacts (default: artifacts.location)
    #[arg(long)]
    pub base: Option<String>,

    /// Leave out the architecture infix
    #[arg(long)]
    pub skip_arch_infix: bool,

    /// Package format: deb, rpm, tar.gz or zip (default: artifacts.format)
    #[arg(long)]
    pub format: Option<PackageFormat>,

    /// Literal architecture infix (default: derived from artifacts.arch)
    #[arg(long)]
    pub arch_ext: Option<String>,
}

#[derive(Args)]
pub struct DigestArgs {
    /// Local artifact file
    pub path: PathBuf,
}

/// # Errors
///
/// Returns an error only if JSON output fails.
pub fn path(app: &AppContext, args: &ArtifactPathArgs) -> Result<ExitCode> {
    let mut artifacts = app.config.artifacts.clone();
    if let Some(format) = args.format {
        artifacts.format = format;
    }
    if let Some(ext) = &args.arch_ext {
        artifacts.arch_ext = Some(ext.clone());
    }
    let convention: ArtifactConvention = artifacts.convention();
    let base = args.base.as_deref().unwrap_or(&artifacts.location);
    let path = convention.build_path(base, &args.filename, args.skip_arch_infix);

    if app.is_json() {
        json::print(&serde_json::json!({ "path": path }))?;
    } else {
        println!("{path}");
    }
    Ok(ExitCode::SUCCESS)
}

/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn digest(app: &AppContext, args: &DigestArgs) -> Result<ExitCode> {
    let present = artifact_present(&args.path);
    let sha256 = sha256_file(&args.path)?;

    if app.is_json() {
        json::print(&serde_json::json!({
            "path": args.path,
            "present": present,
            "sha256": sha256,
        }))?;
    } else if present {
        println!("{sha256}  {}", args.path.display());
    } else {
        app.output
            .warn(&format!("{} is missing or empty", args.path.display()));
    }
    Ok(super::check_code(present))
}
