//! Integration tests for hostprobe
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! None of them reach a remote host.

mod config_command;
