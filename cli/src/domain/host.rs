//! Remote hosts under test.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An addressable remote target.
///
/// `name` is the identity used in logs, checkpoints, and `--host` flags.
/// The connection fields are only read by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    /// Network address; defaults to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Login user; the transport default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Host {
    /// A host reachable under its own name with transport defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            user: None,
            port: None,
        }
    }

    /// `user@address`, or just the address when no user is set.
    #[must_use]
    pub fn destination(&self) -> String {
        let address = self.address.as_deref().unwrap_or(&self.name);
        match &self.user {
            Some(user) => format!("{user}@{address}"),
            None => address.to_string(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
