//! Domain types and validators for harness configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::artifact::{ArtifactConvention, DEFAULT_ARTIFACT_LOCATION, PackageFormat};
use crate::domain::command::ENV_KEY_RE;
use crate::domain::error::ConfigError;
use crate::domain::host::Host;
use crate::domain::service::ServiceManager;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.hostprobe/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Hosts addressed when a command names none.
    pub hosts: Vec<Host>,
    pub ssh: SshConfig,
    /// Environment overrides prefixed to every remote command.
    pub env: BTreeMap<String, String>,
    /// Installation directory of the product under test.
    pub install_root: String,
    /// Plugin tool, relative to `install_root`.
    pub plugin_tool: String,
    pub vendor: VendorLayout,
    pub artifacts: ArtifactConfig,
    pub service_manager: ServiceManager,
    pub checkpoint: CheckpointConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            hosts: Vec::new(),
            ssh: SshConfig::default(),
            env: BTreeMap::from([("JARS_SKIP".to_string(), "true".to_string())]),
            install_root: "/usr/share/logstash".to_string(),
            plugin_tool: "bin/logstash-plugin".to_string(),
            vendor: VendorLayout::default(),
            artifacts: ArtifactConfig::default(),
            service_manager: ServiceManager::default(),
            checkpoint: CheckpointConfig::default(),
        }
    }
}

/// Transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    /// Extra `-o` options, e.g. `StrictHostKeyChecking=no`.
    pub options: Vec<String>,
    /// Run every command through `sudo sh -c`.
    pub sudo: bool,
    pub timeout_secs: u64,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            sudo: true,
            timeout_secs: 120,
        }
    }
}

/// Layout of the vendored dependency tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorLayout {
    pub root: String,
    /// Runtime directory under `root`; its version subdirectories are globbed.
    pub runtime: String,
    pub descriptor_ext: String,
}

impl Default for VendorLayout {
    fn default() -> Self {
        Self {
            root: "/usr/share/logstash/vendor/bundle".to_string(),
            runtime: "jruby".to_string(),
            descriptor_ext: "gemspec".to_string(),
        }
    }
}

impl VendorLayout {
    /// Glob covering every runtime version's `specifications` directory.
    #[must_use]
    pub fn search_root(&self) -> String {
        format!(
            "{}/{}/*/specifications",
            self.root.trim_end_matches('/'),
            self.runtime
        )
    }

    /// Filename pattern for descriptors that may belong to `name`.
    #[must_use]
    pub fn file_pattern(&self, name: &str) -> String {
        format!("{name}-*.{}", self.descriptor_ext)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub location: String,
    pub format: PackageFormat,
    /// Machine architecture override; defaults to the build machine's.
    pub arch: Option<String>,
    /// Literal file-name infix, used as-is instead of deriving one from `arch`.
    pub arch_ext: Option<String>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_ARTIFACT_LOCATION.to_string(),
            format: PackageFormat::default(),
            arch: None,
            arch_ext: None,
        }
    }
}

impl ArtifactConfig {
    #[must_use]
    pub fn convention(&self) -> ArtifactConvention {
        match &self.arch_ext {
            Some(ext) => ArtifactConvention::new(self.format.extension(), ext.clone()),
            None => ArtifactConvention::for_format(self.format, self.arch.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    pub snapshot_name: String,
    pub timeout_secs: u64,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            snapshot_name: "hostprobe".to_string(),
            timeout_secs: 600,
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

impl HarnessConfig {
    /// Check host names and environment keys.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (idx, host) in self.hosts.iter().enumerate() {
            if host.name.trim().is_empty() {
                return Err(ConfigError::EmptyHostName(idx + 1));
            }
            if !seen.insert(host.name.as_str()) {
                return Err(ConfigError::DuplicateHost(host.name.clone()));
            }
        }
        if let Some(key) = self.env.keys().find(|k| !ENV_KEY_RE.is_match(k)) {
            return Err(ConfigError::InvalidEnvKey(key.clone()));
        }
        Ok(())
    }

    /// Default overrides as ordered pairs.
    #[must_use]
    pub fn default_env(&self) -> Vec<(String, String)> {
        self.env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The configured host called `name`, or an ad-hoc one reachable by that name.
    #[must_use]
    pub fn resolve_host(&self, name: &str) -> Host {
        self.hosts
            .iter()
            .find(|h| h.name == name)
            .cloned()
            .unwrap_or_else(|| Host::new(name))
    }
}
