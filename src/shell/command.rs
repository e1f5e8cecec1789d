//! Captured subprocess execution.
//!
//! Used to talk to interpreters: querying their identity and driving
//! environment creation. Programs are run directly, never through a shell.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::error::Result;

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

/// Execute `program` with `args`, capturing both output streams.
///
/// A program that cannot be started is an error; a program that exits
/// non-zero is reported through [`CommandResult::success`].
pub fn execute_quiet<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<CommandResult> {
    tracing::debug!("Executing {}", program.display());
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to run {}", program.display()))?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let result = execute_quiet(Path::new("/bin/sh"), &["-c", "echo hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn reports_exit_code() {
        let result = execute_quiet(Path::new("/bin/sh"), &["-c", "echo oops >&2; exit 3"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stderr.trim(), "oops");
    }

    #[test]
    fn stdin_is_closed() {
        let result = execute_quiet(Path::new("/bin/sh"), &["-c", "cat; echo done"]).unwrap();
        assert_eq!(result.stdout.trim(), "done");
    }

    #[test]
    fn missing_program_is_error() {
        let args: [&str; 0] = [];
        assert!(execute_quiet(Path::new("/definitely/not/here"), &args).is_err());
    }
}
