//! Application service: installed plugin checks.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! A listing that cannot be obtained is reported as "not installed"; there
//! is no retry.

use crate::application::ports::RemoteShell;
use crate::application::services::executor::Executor;
use crate::domain::listing::versioned_token;
use crate::domain::{Host, PluginListing};

/// Queries the plugin tool on a host.
pub struct PackageIntrospector<'a, S: RemoteShell> {
    executor: &'a Executor<S>,
    plugin_tool: &'a str,
}

impl<'a, S: RemoteShell> PackageIntrospector<'a, S> {
    /// `plugin_tool` is relative to the executor's install root.
    pub fn new(executor: &'a Executor<S>, plugin_tool: &'a str) -> Self {
        Self {
            executor,
            plugin_tool,
        }
    }

    /// Whether `name` is installed, optionally at exactly `version`.
    ///
    /// Without a version the plain listing must contain the line `name`;
    /// with one the verbose listing must contain `name (version)`.
    pub async fn is_installed(&self, host: &Host, name: &str, version: Option<&str>) -> bool {
        let (listing, token) = match version {
            None => (self.list(host, false).await, name.to_string()),
            Some(v) => (self.list(host, true).await, versioned_token(name, v)),
        };
        listing.is_some_and(|l| l.contains(&token))
    }

    /// Every version of `name` the verbose listing reports.
    pub async fn installed_versions(&self, host: &Host, name: &str) -> Vec<String> {
        self.list(host, true)
            .await
            .map(|l| l.versions_of(name).into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Fetch and parse one listing. `None` when the tool could not be run.
    pub async fn list(&self, host: &Host, verbose: bool) -> Option<PluginListing> {
        let script = if verbose {
            format!("{} list --verbose", self.plugin_tool)
        } else {
            format!("{} list", self.plugin_tool)
        };
        let command = self.executor.in_install_path(&script).ok()?;
        let result = self.executor.run_on(&command, host).await;
        if !result.success() {
            tracing::warn!(
                host = %host,
                exit_code = ?result.exit_code,
                stderr = %result.stderr.trim(),
                "plugin listing failed; treating as not installed"
            );
            return None;
        }
        let listing = PluginListing::parse(&result.stdout);
        tracing::debug!(host = %host, entries = listing.len(), verbose, "plugin listing fetched");
        Some(listing)
    }
}
