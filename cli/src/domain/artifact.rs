//! Build-artifact naming conventions.
//!
//! Pure functions only: no I/O, no async.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where packaged builds are staged on the hosts by default.
pub const DEFAULT_ARTIFACT_LOCATION: &str = "/logstash-build";

/// Packaging formats the harness knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PackageFormat {
    #[default]
    #[serde(rename = "deb")]
    Deb,
    #[serde(rename = "rpm")]
    Rpm,
    #[serde(rename = "tar.gz")]
    TarGz,
    #[serde(rename = "zip")]
    Zip,
}

impl PackageFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            PackageFormat::Deb => "deb",
            PackageFormat::Rpm => "rpm",
            PackageFormat::TarGz => "tar.gz",
            PackageFormat::Zip => "zip",
        }
    }

    /// Architecture infix used in this format's file names, e.g. `amd64`
    /// for a Debian package built on `x86_64`.
    #[must_use]
    pub fn arch_extension(self, arch: &str) -> String {
        match self {
            PackageFormat::Deb => match arch {
                "x86_64" => "amd64".to_string(),
                "aarch64" => "arm64".to_string(),
                other => other.to_string(),
            },
            PackageFormat::Rpm => arch.to_string(),
            PackageFormat::TarGz => format!("linux-{arch}"),
            PackageFormat::Zip => format!("windows-{arch}"),
        }
    }
}

impl FromStr for PackageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deb" => Ok(PackageFormat::Deb),
            "rpm" => Ok(PackageFormat::Rpm),
            "tar.gz" | "tgz" => Ok(PackageFormat::TarGz),
            "zip" => Ok(PackageFormat::Zip),
            other => Err(format!(
                "unknown package format '{other}' (expected deb, rpm, tar.gz or zip)"
            )),
        }
    }
}

/// The process-wide naming convention: one package extension, one
/// architecture infix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConvention {
    pub package_ext: String,
    pub arch_ext: String,
}

impl ArtifactConvention {
    #[must_use]
    pub fn new(package_ext: impl Into<String>, arch_ext: impl Into<String>) -> Self {
        Self {
            package_ext: package_ext.into(),
            arch_ext: arch_ext.into(),
        }
    }

    /// Convention for `format`, using `arch` or else the architecture this
    /// binary was built for.
    #[must_use]
    pub fn for_format(format: PackageFormat, arch: Option<&str>) -> Self {
        let arch = arch.unwrap_or(std::env::consts::ARCH);
        Self::new(format.extension(), format.arch_extension(arch))
    }

    /// `base/filename[-arch].ext`
    #[must_use]
    pub fn build_path(&self, base: &str, filename: &str, skip_arch_infix: bool) -> String {
        let base = base.trim_end_matches('/');
        if skip_arch_infix {
            format!("{base}/{filename}.{}", self.package_ext)
        } else {
            format!("{base}/{filename}-{}.{}", self.arch_ext, self.package_ext)
        }
    }
}
