//! Activation context for running commands inside an environment.
//!
//! Activating an environment for a subprocess only needs two variables:
//! `VIRTUAL_ENV` pointing at the environment root, and `PATH` with the
//! environment's script directories in front.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use anyhow::Context;

use crate::error::Result;

use super::registry::ManagedEnvironment;

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// Environment variables injected for an activated environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationContext {
    /// Value for `VIRTUAL_ENV`.
    pub virtual_env: PathBuf,
    /// Value for `PATH`.
    pub path: OsString,
}

impl ActivationContext {
    /// Build the context for `env` on top of the current process `PATH`.
    pub fn build(env: &ManagedEnvironment) -> Result<Self> {
        let base = std::env::var_os("PATH").unwrap_or_default();
        Self::build_with_path(env, &base)
    }

    /// Build the context for `env` on top of `base_path`.
    ///
    /// An empty `base_path` restricts the search path to the environment.
    pub fn build_with_path(env: &ManagedEnvironment, base_path: &OsStr) -> Result<Self> {
        let mut path = std::env::join_paths(env.script_dirs())
            .with_context(|| format!("Cannot add {} to PATH", env.path.display()))?;
        if !base_path.is_empty() {
            if !path.is_empty() {
                path.push(PATH_SEPARATOR);
            }
            path.push(base_path);
        }

        Ok(Self {
            virtual_env: env.path.clone(),
            path,
        })
    }

    /// Directories searched for commands, in order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        std::env::split_paths(&self.path).collect()
    }

    /// Variables to set on the child process.
    pub fn vars(&self) -> Vec<(&'static str, OsString)> {
        vec![
            ("PATH", self.path.clone()),
            ("VIRTUAL_ENV", self.virtual_env.clone().into_os_string()),
        ]
    }

    /// Apply the variables to a command about to be spawned.
    pub fn apply(&self, command: &mut std::process::Command) {
        command.envs(self.vars());
    }
}
