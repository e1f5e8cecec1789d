//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{PyemError, Result};

/// Name of the settings file at the project root.
pub const SETTINGS_FILE: &str = ".pyem.yml";

/// Path of the settings file for `project_root`.
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_FILE)
}

/// Load settings for `project_root`, falling back to defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let path = settings_path(project_root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(PyemError::Io(e)),
    };

    parse_settings(&content, &path)
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| PyemError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
