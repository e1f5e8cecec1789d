//! Base interpreters.
//!
//! Everything pyem needs from a Python installation goes through the
//! [`PythonLauncher`] trait: locating it, asking for its quintuplet, and
//! creating an environment from it.

pub mod create;
pub mod request;
pub mod scripts;

use std::path::{Path, PathBuf};

use crate::config::Creator;
use crate::environment::Quintuplet;
use crate::error::{PyemError, Result};
use crate::shell::{execute_quiet, find_executable, system_path};

pub use request::{looks_like_path, PythonRequest};

/// Operations on base interpreters.
pub trait PythonLauncher {
    /// Locate the interpreter for a user request (version, path or command).
    fn resolve(&self, request: &str) -> Result<PathBuf>;

    /// Ask `python` for its quintuplet.
    fn quintuplet(&self, python: &Path) -> Result<Quintuplet>;

    /// Create an environment at `env_dir` from `python`.
    fn create_venv(&self, python: &Path, env_dir: &Path, prompt: &str) -> Result<()>;
}

/// Launcher backed by real interpreters on this machine.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    creator: Creator,
    search_path: Vec<PathBuf>,
}

impl SystemLauncher {
    /// Launcher that searches the process PATH.
    pub fn new(creator: Creator) -> Self {
        Self::with_search_path(creator, system_path())
    }

    pub fn with_search_path(creator: Creator, search_path: Vec<PathBuf>) -> Self {
        Self {
            creator,
            search_path,
        }
    }

    fn resolve_version(&self, spec: &str) -> Result<PathBuf> {
        let py = find_executable("py", &self.search_path).ok_or_else(|| {
            PyemError::PyLauncherUnavailable {
                spec: spec.to_string(),
            }
        })?;

        let flag = format!("-{}", spec);
        let result = execute_quiet(&py, &[flag.as_str(), "-c", scripts::EXECUTABLE])?;
        let output = result.stdout.trim();
        if !result.success || output.is_empty() {
            tracing::debug!("py {} failed: {}", flag, result.stderr.trim());
            return Err(PyemError::InterpreterNotFound {
                spec: spec.to_string(),
            });
        }

        let path = PathBuf::from(output);
        Ok(std::fs::canonicalize(&path).unwrap_or(path))
    }
}

impl PythonLauncher for SystemLauncher {
    fn resolve(&self, request: &str) -> Result<PathBuf> {
        let not_found = || PyemError::InterpreterNotFound {
            spec: request.to_string(),
        };

        match PythonRequest::parse(request) {
            PythonRequest::Version(version) => self.resolve_version(&version),
            PythonRequest::Path(path) => {
                if path.is_file() {
                    Ok(path)
                } else {
                    Err(not_found())
                }
            }
            PythonRequest::Command(name) => {
                find_executable(&name, &self.search_path).ok_or_else(not_found)
            }
        }
    }

    fn quintuplet(&self, python: &Path) -> Result<Quintuplet> {
        let result = execute_quiet(python, &["-c", scripts::QUINTUPLET])?;
        if !result.success {
            return Err(PyemError::InterpreterQueryFailed {
                python: python.to_path_buf(),
                message: result.stderr.trim().to_string(),
            });
        }

        result
            .stdout
            .trim()
            .parse()
            .map_err(|e: crate::environment::InvalidQuintuplet| {
                PyemError::InterpreterQueryFailed {
                    python: python.to_path_buf(),
                    message: e.to_string(),
                }
            })
    }

    fn create_venv(&self, python: &Path, env_dir: &Path, prompt: &str) -> Result<()> {
        tracing::debug!(
            "Creating {} from {} ({:?})",
            env_dir.display(),
            python.display(),
            self.creator
        );
        create::create(self.creator, python, env_dir, prompt)
    }
}

/// In-memory launcher for tests: every request resolves to one interpreter
/// with a fixed quintuplet.
#[cfg(test)]
pub struct FakeLauncher {
    quintuplet: String,
    fail_creation: bool,
    prompts: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl FakeLauncher {
    pub fn new(quintuplet: &str) -> Self {
        Self {
            quintuplet: quintuplet.to_string(),
            fail_creation: false,
            prompts: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// A launcher whose creation starts the environment, then fails.
    pub fn failing(quintuplet: &str) -> Self {
        Self {
            fail_creation: true,
            ..Self::new(quintuplet)
        }
    }

    /// Prompts passed to `create_venv`, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[cfg(test)]
impl PythonLauncher for FakeLauncher {
    fn resolve(&self, request: &str) -> Result<PathBuf> {
        Ok(PathBuf::from("/fake/bin").join(request))
    }

    fn quintuplet(&self, _python: &Path) -> Result<Quintuplet> {
        Ok(self.quintuplet.parse().map_err(anyhow::Error::from)?)
    }

    fn create_venv(&self, _python: &Path, env_dir: &Path, prompt: &str) -> Result<()> {
        self.prompts.borrow_mut().push(prompt.to_string());
        std::fs::create_dir_all(env_dir.join("bin"))?;
        if self.fail_creation {
            return Err(PyemError::CreationFailed {
                path: env_dir.to_path_buf(),
                code: Some(1),
                message: "ensurepip failed".to_string(),
            });
        }
        Ok(())
    }
}
