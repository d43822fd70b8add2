//! Remote shell commands and their environment overrides.
//!
//! Pure functions only: no I/O, no async.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::CommandError;

/// Names accepted as environment override keys.
pub static ENV_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex")
});

/// A shell string plus the environment overrides it runs with.
///
/// Overrides are rendered as a literal `KEY='value' ` prefix, so the script
/// itself is never re-quoted. Once built a `Command` is only ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    script: String,
    env: Vec<(String, String)>,
}

impl Command {
    /// Create a command with no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Empty`] if `script` is empty or whitespace.
    pub fn new(script: impl Into<String>) -> Result<Self, CommandError> {
        let script = script.into();
        if script.trim().is_empty() {
            return Err(CommandError::Empty);
        }
        Ok(Self {
            script,
            env: Vec::new(),
        })
    }

    /// Return a copy of this command with `key=value` added to its overrides.
    /// A key that is already present is replaced in place.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidEnvKey`] if `key` is not a shell identifier.
    pub fn with_env(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let key = key.into();
        if !ENV_KEY_RE.is_match(&key) {
            return Err(CommandError::InvalidEnvKey(key));
        }
        let value = value.into();
        match self.env.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.env.push((key, value)),
        }
        Ok(self)
    }

    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    #[must_use]
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// Render the command line sent to the remote shell.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&[])
    }

    /// Render with `defaults` applied first. Overrides set on the command
    /// itself win over a default with the same key.
    #[must_use]
    pub fn render_with(&self, defaults: &[(String, String)]) -> String {
        let mut line = String::new();
        let inherited = defaults
            .iter()
            .filter(|(key, _)| !self.env.iter().any(|(own, _)| own == key));
        for (key, value) in inherited.chain(self.env.iter()) {
            line.push_str(key);
            line.push('=');
            line.push_str(&shell_quote(value));
            line.push(' ');
        }
        line.push_str(&self.script);
        line
    }
}

/// Quote `s` as a single POSIX shell word.
#[must_use]
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
