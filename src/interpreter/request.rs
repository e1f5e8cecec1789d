//! Base interpreter requests.
//!
//! `pyem venv add` accepts a version (`3.11`, `3.7-32`), a path to an
//! interpreter, or a command name looked up on PATH (`python3`, `pypy3`).

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Version requests understood by the `py` launcher: major, optional
/// minor, optional bitness.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?(-(32|64))?$").expect("VERSION_REGEX must compile")
});

/// A parsed interpreter request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PythonRequest {
    /// A version for the `py` launcher, e.g. `3.11` or `3.7-32`.
    Version(String),
    /// A filesystem path to an interpreter.
    Path(PathBuf),
    /// A command name to look up on PATH.
    Command(String),
}

impl PythonRequest {
    /// Classify a user-supplied interpreter argument.
    pub fn parse(arg: &str) -> Self {
        if VERSION_REGEX.is_match(arg) {
            Self::Version(arg.to_string())
        } else if looks_like_path(arg) {
            Self::Path(PathBuf::from(arg))
        } else {
            Self::Command(arg.to_string())
        }
    }
}

/// A string looks like a path if it contains a path separator.
///
/// Bare names are never treated as paths, so a file in the working
/// directory cannot shadow a specifier of the same name.
pub fn looks_like_path(value: &str) -> bool {
    value.contains(std::path::MAIN_SEPARATOR) || (cfg!(windows) && value.contains('/'))
}
