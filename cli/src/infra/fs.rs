//! Local filesystem helpers for build artifacts.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Whether `path` exists and is non-empty.
#[must_use]
pub fn artifact_present(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.len() > 0)
}

/// Hex SHA-256 of the file at `path`, or an empty string when there is no
/// artifact there.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn sha256_file(path: &Path) -> Result<String> {
    if !artifact_present(path) {
        return Ok(String::new());
    }
    let mut file =
        std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
