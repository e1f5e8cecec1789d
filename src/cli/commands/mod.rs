//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which discovers the
//! project, applies its settings, and routes CLI subcommands to their
//! implementations. Anything that is not a pyem subcommand is run inside
//! an environment by [`run::RunCommand`].

pub mod completions;
pub mod dispatcher;
pub mod run;
pub mod venv;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
