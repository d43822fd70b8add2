//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the ssh
//! transport, Vagrant checkpoints, config loading, and local file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` are forbidden.

pub mod command_runner;
pub mod config;
pub mod fs;
pub mod ssh;
pub mod vagrant;
