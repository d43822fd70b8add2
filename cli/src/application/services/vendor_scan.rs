//! Application service: vendored dependency detection.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//!
//! Discovery is a filename glob, which cannot tell `foo-1.0.gemspec` from
//! `foo-bar-9.9.9.gemspec`. Every hit is therefore fetched and parsed
//! locally, and only the parsed name decides a match. Hits that cannot be
//! fetched or parsed are dropped with a warning.

use crate::application::ports::RemoteShell;
use crate::application::services::executor::Executor;
use crate::domain::command::shell_quote;
use crate::domain::config::VendorLayout;
use crate::domain::{Command, Host, PackageDescriptor, descriptor};

pub struct VendorScanner<'a, S: RemoteShell> {
    executor: &'a Executor<S>,
    layout: &'a VendorLayout,
}

impl<'a, S: RemoteShell> VendorScanner<'a, S> {
    pub fn new(executor: &'a Executor<S>, layout: &'a VendorLayout) -> Self {
        Self { executor, layout }
    }

    /// Whether any version of `name` is vendored on `host`.
    pub async fn is_vendored(&self, host: &Host, name: &str) -> bool {
        !self.vendored_descriptors(host, name).await.is_empty()
    }

    /// Parsed descriptors whose name is exactly `name`.
    pub async fn vendored_descriptors(&self, host: &Host, name: &str) -> Vec<PackageDescriptor> {
        let candidates = self.candidate_paths(host, name).await;
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut confirmed = Vec::new();
        for path in &candidates {
            let Some(descriptor) = self.fetch_descriptor(host, path).await else {
                continue;
            };
            if descriptor.name == name {
                confirmed.push(descriptor);
            } else {
                tracing::debug!(path = %path, parsed = %descriptor.name, "glob hit belongs to another package");
            }
        }
        confirmed
    }

    /// Descriptor files whose filename could belong to `name`.
    pub async fn candidate_paths(&self, host: &Host, name: &str) -> Vec<String> {
        let script = format!(
            "find {} -name {}",
            self.layout.search_root(),
            shell_quote(&self.layout.file_pattern(name))
        );
        let Ok(command) = Command::new(script) else {
            return Vec::new();
        };
        let result = self.executor.run_on(&command, host).await;
        if result.exit_code.is_none() {
            return Vec::new();
        }
        // `find` exits non-zero when a runtime directory is missing but still
        // prints whatever it did find.
        result
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    async fn fetch_descriptor(&self, host: &Host, path: &str) -> Option<PackageDescriptor> {
        let command = Command::new(format!("cat {}", shell_quote(path))).ok()?;
        let result = self.executor.run_on(&command, host).await;
        if !result.success() {
            tracing::warn!(host = %host, path = %path, stderr = %result.stderr.trim(), "could not read descriptor");
            return None;
        }
        match descriptor::parse(&result.stdout) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(host = %host, path = %path, error = %e, "dropping unparseable descriptor");
                None
            }
        }
    }
}
