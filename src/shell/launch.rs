//! Launching user commands inside an activated environment.

use std::process::Command;

use crate::environment::ActivationContext;
use crate::error::{PyemError, Result};

use super::path::resolve_command;

/// Run `command` with `args` under `context`.
///
/// On Unix the current process image is replaced, so this only returns on
/// failure. On Windows the program is spawned and its exit code returned.
#[cfg(unix)]
pub fn launch(context: &ActivationContext, command: &str, args: &[String]) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let program = resolve_command(command, &context.search_path()).ok_or_else(|| {
        PyemError::CommandNotFound {
            command: command.to_string(),
        }
    })?;
    tracing::debug!("exec {} {:?}", program.display(), args);

    let mut cmd = Command::new(&program);
    cmd.arg0(command).args(args);
    context.apply(&mut cmd);

    let err = cmd.exec();
    Err(err.into())
}

/// Run `command` with `args` under `context`.
///
/// Commands missing from PATH are handed to `cmd /C` so shell built-ins
/// and file associations still work.
#[cfg(windows)]
pub fn launch(context: &ActivationContext, command: &str, args: &[String]) -> Result<i32> {
    use std::os::windows::process::CommandExt;

    let mut cmd = match resolve_command(command, &context.search_path()) {
        Some(program) => {
            tracing::debug!("spawn {} {:?}", program.display(), args);
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        }
        None => {
            let line = super::platform::cmdify(command, args);
            tracing::debug!("cmd /C {}", line);
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").raw_arg(line);
            cmd
        }
    };
    context.apply(&mut cmd);

    let status = cmd.status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PyemError::CommandNotFound {
                command: command.to_string(),
            }
        } else {
            PyemError::Io(e)
        }
    })?;
    Ok(status.code().unwrap_or(1))
}
