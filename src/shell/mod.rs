//! Subprocess execution and executable lookup.

pub mod command;
pub mod launch;
pub mod path;
pub mod platform;

pub use command::{execute_quiet, CommandResult};
pub use launch::launch;
pub use path::{find_executable, is_executable, resolve_command, system_path};
pub use platform::{cmdify, is_ci};
