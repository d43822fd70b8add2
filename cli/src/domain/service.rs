//! Init-system commands for starting and stopping services on a host.

use serde::{Deserialize, Serialize};

use crate::domain::command::shell_quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceManager {
    #[default]
    Systemd,
    Sysv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
}

impl ServiceAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
        }
    }
}

impl ServiceManager {
    /// Shell line performing `action` on `service`.
    #[must_use]
    pub fn command_line(self, service: &str, action: ServiceAction) -> String {
        let service = shell_quote(service);
        match self {
            ServiceManager::Systemd => format!("systemctl {} {service}", action.as_str()),
            ServiceManager::Sysv => format!("service {service} {}", action.as_str()),
        }
    }
}
