//! Error types for pyem operations.
//!
//! This module defines [`PyemError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PyemError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PyemError::Other`) for unexpected errors
//! - Every variant maps to a stable exit code through [`PyemError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

use crate::environment::Quintuplet;

/// Core error type for pyem operations.
#[derive(Debug, Error)]
pub enum PyemError {
    /// No `pyproject.toml` was found from the starting directory.
    #[error("No pyproject.toml found in {start}")]
    ProjectNotFound { start: PathBuf },

    /// The specifier matched none of the project's environments.
    #[error("Specifier {spec:?} does not match any environments; tried:{}", format_candidates(.tried))]
    EnvironmentNotFound {
        spec: String,
        tried: Vec<Quintuplet>,
    },

    /// The specifier matched more than one environment.
    #[error("Specifier {spec:?} is ambiguous; choose from:{}", format_candidates(.matches))]
    AmbiguousSpec {
        spec: String,
        matches: Vec<Quintuplet>,
    },

    /// No `--spec` given and the project has no active environment.
    #[error("No active environment. Set one with `pyem venv set` first, or select one explicitly with `--spec`")]
    NoActiveEnvironment,

    /// The base interpreter requested for `venv add` could not be located.
    #[error("Interpreter not found: {spec}")]
    InterpreterNotFound { spec: String },

    /// A version request needs the `py` launcher, which is not on PATH.
    #[error("Python launcher `py` is not available to resolve {spec:?}")]
    PyLauncherUnavailable { spec: String },

    /// The interpreter did not report a usable quintuplet.
    #[error("Failed to query interpreter {python}: {message}")]
    InterpreterQueryFailed { python: PathBuf, message: String },

    /// An environment with the same quintuplet already exists.
    #[error("Environment already exists: {name}")]
    EnvironmentExists { name: Quintuplet },

    /// Refused to remove the active environment.
    #[error("Environment {name} is active; run `pyem venv unset` before removing it")]
    EnvironmentActive { name: Quintuplet },

    /// The environment directory is missing an interpreter or site-packages.
    #[error("Invalid environment at {path}")]
    EnvironmentInvalid { path: PathBuf },

    /// Neither `venv` nor `virtualenv` can be used by the interpreter.
    #[error("virtualenv not available for {python}")]
    VirtualenvUnavailable { python: PathBuf },

    /// The external creation tooling failed.
    #[error("Failed to create environment at {path} (exit code {code:?}): {message}")]
    CreationFailed {
        path: PathBuf,
        code: Option<i32>,
        message: String,
    },

    /// The command to run was not found on the activated PATH.
    #[error("Command not found: {command:?}")]
    CommandNotFound { command: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PyemError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InterpreterNotFound { .. } => 1,
            Self::ProjectNotFound { .. } => 2,
            Self::PyLauncherUnavailable { .. } => 3,
            Self::EnvironmentInvalid { .. } => 4,
            Self::AmbiguousSpec { .. } => 5,
            Self::NoActiveEnvironment => 6,
            Self::EnvironmentNotFound { .. } => 7,
            Self::VirtualenvUnavailable { .. } => 8,
            Self::CommandNotFound { .. } => command_not_found_code(),
            _ => 1,
        }
    }
}

#[cfg(unix)]
fn command_not_found_code() -> i32 {
    libc::ENOENT
}

#[cfg(not(unix))]
fn command_not_found_code() -> i32 {
    2
}

fn format_candidates(names: &[Quintuplet]) -> String {
    names.iter().map(|n| format!("\n  {}", n)).collect()
}

/// Result type alias for pyem operations.
pub type Result<T> = std::result::Result<T, PyemError>;
