//! Environment creation through the target interpreter.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::Creator;
use crate::error::{PyemError, Result};
use crate::shell::{execute_quiet, CommandResult};

use super::scripts;

/// Outcome of attempting creation with `venv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvOutcome {
    Created,
    Unavailable,
}

fn failed(env_dir: &Path, result: &CommandResult) -> PyemError {
    let message = if result.stderr.trim().is_empty() {
        result.stdout.trim().to_string()
    } else {
        result.stderr.trim().to_string()
    };
    PyemError::CreationFailed {
        path: env_dir.to_path_buf(),
        code: result.exit_code,
        message,
    }
}

/// Create with the standard library `venv` module.
pub fn with_venv(python: &Path, env_dir: &Path, prompt: &str) -> Result<VenvOutcome> {
    let result = execute_quiet(
        python,
        &[
            OsStr::new("-c"),
            OsStr::new(scripts::CREATE_VENV),
            env_dir.as_os_str(),
            OsStr::new(prompt),
        ],
    )?;
    match result.exit_code {
        Some(0) => Ok(VenvOutcome::Created),
        Some(code) if is_venv_unavailable(code) => Ok(VenvOutcome::Unavailable),
        _ => Err(failed(env_dir, &result)),
    }
}

/// POSIX truncates exit statuses to eight bits.
fn is_venv_unavailable(code: i32) -> bool {
    code == scripts::VENV_UNAVAILABLE || code == scripts::VENV_UNAVAILABLE & 0xff
}

/// Create with the `virtualenv` package.
pub fn with_virtualenv(python: &Path, env_dir: &Path, prompt: &str) -> Result<()> {
    let probe = execute_quiet(python, &["-c", scripts::HAS_VIRTUALENV])?;
    if !probe.success {
        return Err(PyemError::VirtualenvUnavailable {
            python: python.to_path_buf(),
        });
    }

    let result = execute_quiet(
        python,
        &[
            OsStr::new("-m"),
            OsStr::new("virtualenv"),
            OsStr::new("--prompt"),
            OsStr::new(prompt),
            env_dir.as_os_str(),
        ],
    )?;
    if result.success {
        Ok(())
    } else {
        Err(failed(env_dir, &result))
    }
}

/// Create an environment at `env_dir` with the strategy `creator` selects.
pub fn create(creator: Creator, python: &Path, env_dir: &Path, prompt: &str) -> Result<()> {
    match creator {
        Creator::Virtualenv => with_virtualenv(python, env_dir, prompt),
        Creator::Venv => match with_venv(python, env_dir, prompt)? {
            VenvOutcome::Created => Ok(()),
            VenvOutcome::Unavailable => Err(PyemError::CreationFailed {
                path: env_dir.to_path_buf(),
                code: Some(scripts::VENV_UNAVAILABLE),
                message: "venv is not usable by this interpreter".to_string(),
            }),
        },
        Creator::Auto => match with_venv(python, env_dir, prompt)? {
            VenvOutcome::Created => Ok(()),
            VenvOutcome::Unavailable => {
                tracing::info!("venv not available, falling back to virtualenv");
                with_virtualenv(python, env_dir, prompt)
            }
        },
    }
}
