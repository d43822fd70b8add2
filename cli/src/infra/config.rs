//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::HarnessConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HOSTPROBE_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file.
///
/// Resolution order: the explicit path, then `$HOSTPROBE_CONFIG`, then
/// `~/.hostprobe/config.yaml`.
#[derive(Debug, Default)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<HarnessConfig> {
        let path = self.path()?;
        if !path.exists() {
            if self.explicit.is_some() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(HarnessConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: HarnessConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), hosts = config.hosts.len(), "config loaded");
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".hostprobe").join("config.yaml"))
    }
}
