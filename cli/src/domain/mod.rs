//! Domain layer: pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifact;
pub mod command;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod listing;
pub mod service;

pub use artifact::{ArtifactConvention, PackageFormat};
pub use command::Command;
pub use config::HarnessConfig;
pub use descriptor::PackageDescriptor;
pub use error::{CommandError, ConfigError, DescriptorError, ExecError};
pub use host::Host;
pub use listing::PluginListing;
pub use service::{ServiceAction, ServiceManager};
