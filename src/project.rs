//! Project discovery.
//!
//! A project is a directory containing `pyproject.toml`. Without an
//! explicit location, discovery walks upward from the working directory.

use std::path::{Path, PathBuf};

use crate::config::{load_settings, Settings};
use crate::environment::Registry;
use crate::error::{PyemError, Result};

/// File that marks a project root.
pub const PROJECT_MARKER: &str = "pyproject.toml";

/// A discovered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Locate the project.
    ///
    /// With `explicit`, only that directory is checked (the parent is used
    /// when it names a file). Otherwise the working directory and its
    /// ancestors are searched.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no directory qualifies.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::at(path),
            None => Self::find_upward(&std::env::current_dir()?),
        }
    }

    /// Check a single location without walking upward.
    pub fn at(path: &Path) -> Result<Self> {
        let not_found = || PyemError::ProjectNotFound {
            start: path.to_path_buf(),
        };

        // Resolve first: a bare file name has an empty parent.
        let resolved = path.canonicalize().map_err(|_| not_found())?;
        let dir = if resolved.is_file() {
            resolved.parent().map(Path::to_path_buf).ok_or_else(not_found)?
        } else {
            resolved
        };

        if dir.join(PROJECT_MARKER).is_file() {
            Ok(Self { root: dir })
        } else {
            Err(not_found())
        }
    }

    /// Search `start` and its ancestors.
    pub fn find_upward(start: &Path) -> Result<Self> {
        let not_found = || PyemError::ProjectNotFound {
            start: start.to_path_buf(),
        };
        let start_abs = start.canonicalize().map_err(|_| not_found())?;

        start_abs
            .ancestors()
            .find(|dir| dir.join(PROJECT_MARKER).is_file())
            .map(|dir| Self {
                root: dir.to_path_buf(),
            })
            .ok_or_else(not_found)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name of the project root, used as the default prompt.
    pub fn name(&self) -> &str {
        self.root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("venv")
    }

    /// Environments of this project.
    pub fn registry(&self) -> Registry {
        Registry::new(&self.root)
    }

    /// Settings from `.pyem.yml`, or defaults.
    pub fn settings(&self) -> Result<Settings> {
        load_settings(&self.root)
    }
}
