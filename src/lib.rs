//! pyem - Per-project Python virtual environment management.
//!
//! pyem keeps one virtual environment per base interpreter inside a
//! project, names each by the interpreter's quintuplet
//! (`implementation-version-platform-arch-hash`), and runs commands inside
//! whichever one a short specifier selects.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project settings (`.pyem.yml`)
//! - [`environment`] - Environment registry, specifier resolution, activation
//! - [`error`] - Error types and result aliases
//! - [`interpreter`] - Locating and querying base interpreters
//! - [`project`] - Project discovery
//! - [`shell`] - Subprocess execution and command launching
//! - [`ui`] - Spinners, tables and terminal output
//!
//! # Example
//!
//! ```
//! use pyem::environment::{select, EnvSpec, ManagedEnvironment};
//!
//! let envs: Vec<ManagedEnvironment> = [
//!     "cpython-3.7-darwin-x86_64-3d3725a6",
//!     "cpython-3.8-darwin-x86_64-77aa0011",
//! ]
//! .into_iter()
//! .map(|name| ManagedEnvironment::new(name.parse().unwrap(), name.into()))
//! .collect();
//!
//! let found = select("3.8", EnvSpec::parse("3.8").as_ref(), &envs).unwrap();
//! assert_eq!(found.name(), "cpython-3.8-darwin-x86_64-77aa0011");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod project;
pub mod shell;
pub mod ui;

pub use error::{PyemError, Result};
