//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors raised while constructing a [`Command`](crate::domain::command::Command).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command must not be empty.")]
    Empty,

    #[error("Invalid environment variable name '{0}': must match ^[A-Za-z_][A-Za-z0-9_]*$")]
    InvalidEnvKey(String),
}

// ── Execution errors ──────────────────────────────────────────────────────────

/// Errors raised by the executor before any remote command is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("No hosts to run on. Pass --host or list hosts under `hosts:` in the config file.")]
    NoHosts,
}

// ── Descriptor errors ─────────────────────────────────────────────────────────

/// Reasons a package metadata descriptor could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("no `Gem::Specification.new do |..|` block found")]
    MissingSpecification,

    #[error("specification does not assign a name")]
    MissingName,

    #[error("specification assigns an empty name")]
    EmptyName,

    #[error("unterminated string literal on line {line}")]
    UnterminatedLiteral { line: usize },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to harness configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Host entry #{0} has an empty name.")]
    EmptyHostName(usize),

    #[error("Host '{0}' is listed more than once.")]
    DuplicateHost(String),

    #[error("Invalid environment override '{0}': must match ^[A-Za-z_][A-Za-z0-9_]*$")]
    InvalidEnvKey(String),
}
