//! Unit tests for hostprobe
//!
//! These tests use recording doubles and run fast without spawning `ssh`
//! or `vagrant`.

mod artifacts;
mod checkpoint_service;
mod executor_service;
mod host_ops_service;
mod property_tests;
mod ssh_shell;
