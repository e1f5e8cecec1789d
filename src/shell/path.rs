//! Executable lookup on search paths.
//!
//! Lookups walk PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let mut out = vec![dir.join(name)];
    if Path::new(name).extension().is_none() {
        let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        out.extend(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|e| dir.join(format!("{}{}", name, e.to_lowercase()))),
        );
    }
    out
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

/// Find `name` in the given directories.
///
/// Returns the first match that exists and is executable.
pub fn find_executable(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .flat_map(|dir| candidates(dir, name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Locate the program to launch for `command`.
///
/// Symlinks are returned as found: a venv's `python` is a symlink whose
/// location tells the interpreter which environment it belongs to.
/// Other hits are canonicalized.
pub fn resolve_command(command: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let found = find_executable(command, path_entries)?;

    let is_symlink = std::fs::symlink_metadata(&found)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        return Some(found);
    }
    Some(std::fs::canonicalize(&found).unwrap_or(found))
}
