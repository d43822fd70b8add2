//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod checkpoint;
pub mod executor;
pub mod host_ops;
pub mod introspect;
pub mod vendor_scan;

pub use checkpoint::HostCheckpoint;
pub use executor::{CommandResult, Executor};
pub use host_ops::HostOps;
pub use introspect::PackageIntrospector;
pub use vendor_scan::VendorScanner;
