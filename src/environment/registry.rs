//! Managed environment registry.
//!
//! Environments live in `<root>/.venvs/<quintuplet>`. The active one is
//! recorded by the `<root>/.venv` marker, which is normally a file holding
//! `.venvs/<quintuplet>` (the layout Pipenv understands), or a symlink into
//! `.venvs` for projects set up by hand.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PyemError, Result};
use crate::interpreter::PythonLauncher;
use crate::shell::find_executable;

use super::quintuplet::Quintuplet;

/// Directory under the project root holding managed environments.
pub const CONTAINER_DIR: &str = ".venvs";

/// Marker naming the active environment.
pub const MARKER_NAME: &str = ".venv";

/// A virtual environment managed by the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedEnvironment {
    /// Identity, also the directory name.
    pub quintuplet: Quintuplet,
    /// Environment root directory.
    pub path: PathBuf,
    /// Whether the marker points at this environment.
    pub active: bool,
}

impl ManagedEnvironment {
    /// Create an inactive environment handle.
    pub fn new(quintuplet: Quintuplet, path: PathBuf) -> Self {
        Self {
            quintuplet,
            path,
            active: false,
        }
    }

    /// The environment's identity string.
    pub fn name(&self) -> &str {
        self.quintuplet.as_str()
    }

    /// Script directories that exist in this environment, `bin` before `Scripts`.
    pub fn script_dirs(&self) -> Vec<PathBuf> {
        ["bin", "Scripts"]
            .iter()
            .map(|d| self.path.join(d))
            .filter(|p| p.is_dir())
            .collect()
    }

    /// The environment's Python executable.
    ///
    /// Only the environment's own script directories are searched.
    pub fn python(&self) -> Result<PathBuf> {
        let exe = if cfg!(windows) { "python.exe" } else { "python" };
        find_executable(exe, &self.script_dirs()).ok_or_else(|| PyemError::EnvironmentInvalid {
            path: self.path.clone(),
        })
    }

    /// The environment's `site-packages` directory.
    pub fn site_packages(&self) -> Result<PathBuf> {
        // POSIX: lib/python*.*/site-packages
        if let Ok(entries) = fs::read_dir(self.path.join("lib")) {
            let mut candidates: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .filter(|e| {
                    let name = e.file_name();
                    let name = name.to_string_lossy();
                    name.starts_with("python") && name.contains('.')
                })
                .map(|e| e.path().join("site-packages"))
                .filter(|p| p.is_dir())
                .collect();
            candidates.sort();
            if let Some(found) = candidates.into_iter().next() {
                return Ok(found);
            }
        }

        // Windows: Lib/site-packages
        let windows = self.path.join("Lib").join("site-packages");
        if windows.is_dir() {
            return Ok(windows);
        }

        Err(PyemError::EnvironmentInvalid {
            path: self.path.clone(),
        })
    }
}

/// Registry of a project's managed environments.
#[derive(Debug, Clone)]
pub struct Registry {
    container: PathBuf,
    marker: PathBuf,
}

impl Registry {
    /// Create a registry for the project rooted at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            container: root.join(CONTAINER_DIR),
            marker: root.join(MARKER_NAME),
        }
    }

    /// Directory holding the environments.
    pub fn container(&self) -> &Path {
        &self.container
    }

    /// List managed environments, sorted by quintuplet.
    ///
    /// Directories whose names are not quintuplets are skipped.
    pub fn list(&self) -> Result<Vec<ManagedEnvironment>> {
        let entries = match fs::read_dir(&self.container) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let active = self.active_name();
        let mut envs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::debug!("Skipping non-UTF-8 entry {}", path.display());
                continue;
            };
            match name.parse::<Quintuplet>() {
                Ok(quintuplet) => {
                    let mut env = ManagedEnvironment::new(quintuplet, path);
                    env.active = active.as_deref() == Some(name);
                    envs.push(env);
                }
                Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
            }
        }

        envs.sort_by(|a, b| a.quintuplet.cmp(&b.quintuplet));
        Ok(envs)
    }

    /// The active environment, if the marker names an existing one.
    pub fn active(&self) -> Option<ManagedEnvironment> {
        let name = self.active_name()?;
        let quintuplet = name.parse().ok()?;
        let mut env = ManagedEnvironment::new(quintuplet, self.container.join(&name));
        env.active = true;
        Some(env)
    }

    fn active_name(&self) -> Option<String> {
        if self.marker.is_file() {
            let content = fs::read_to_string(&self.marker).ok()?;
            let (prefix, name) = content.trim().split_once('/')?;
            if prefix != CONTAINER_DIR || name.is_empty() {
                tracing::debug!("Marker points outside {}: {:?}", CONTAINER_DIR, content);
                return None;
            }
            if !self.container.join(name).is_dir() {
                return None;
            }
            return Some(name.to_string());
        }

        let is_symlink = fs::symlink_metadata(&self.marker)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if is_symlink {
            let target = fs::canonicalize(&self.marker).ok()?;
            if !target.is_dir() {
                return None;
            }
            let container = fs::canonicalize(&self.container).ok()?;
            if target.parent() != Some(container.as_path()) {
                return None;
            }
            return target.file_name()?.to_str().map(str::to_string);
        }

        None
    }

    /// Mark `env` as the active environment.
    pub fn activate(&self, env: &ManagedEnvironment) -> Result<()> {
        // Writing through a compatibility symlink would land in the venv.
        if fs::symlink_metadata(&self.marker)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
        {
            fs::remove_file(&self.marker)?;
        }
        fs::write(
            &self.marker,
            format!("{}/{}", CONTAINER_DIR, env.quintuplet),
        )?;
        tracing::debug!("Activated {}", env.quintuplet);
        Ok(())
    }

    /// Clear the active marker. Returns whether a marker was removed.
    pub fn deactivate(&self) -> Result<bool> {
        match fs::remove_file(&self.marker) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete `env` from disk. The active environment cannot be removed.
    pub fn remove(&self, env: &ManagedEnvironment) -> Result<()> {
        if self.active_name().as_deref() == Some(env.name()) {
            return Err(PyemError::EnvironmentActive {
                name: env.quintuplet.clone(),
            });
        }

        let meta = fs::symlink_metadata(&env.path)?;
        if meta.file_type().is_symlink() {
            fs::remove_file(&env.path)?;
        } else {
            fs::remove_dir_all(&env.path)?;
        }
        tracing::debug!("Removed {}", env.path.display());
        Ok(())
    }

    /// Create an environment from the interpreter described by `python`.
    pub fn create(
        &self,
        launcher: &dyn PythonLauncher,
        python: &str,
        prompt: &str,
    ) -> Result<ManagedEnvironment> {
        let interpreter = launcher.resolve(python)?;
        let quintuplet = launcher.quintuplet(&interpreter)?;

        let path = self.container.join(quintuplet.as_str());
        if path.exists() {
            return Err(PyemError::EnvironmentExists { name: quintuplet });
        }

        fs::create_dir_all(&self.container)?;
        tracing::debug!(
            "Creating {} from {} with prompt {:?}",
            path.display(),
            interpreter.display(),
            prompt
        );
        if let Err(e) = launcher.create_venv(&interpreter, &path, prompt) {
            if path.exists() {
                if let Err(cleanup) = fs::remove_dir_all(&path) {
                    tracing::warn!("Could not remove {}: {}", path.display(), cleanup);
                }
            }
            return Err(e);
        }

        Ok(ManagedEnvironment::new(quintuplet, path))
    }
}
