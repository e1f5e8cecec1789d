//! Managed virtual environments.
//!
//! Each project keeps its environments under `<root>/.venvs`, one directory
//! per interpreter, named by the interpreter's quintuplet. This module
//! enumerates them, resolves user specifiers to a single environment, and
//! computes the variables needed to run commands inside one.

pub mod activation;
pub mod quintuplet;
pub mod registry;
pub mod resolver;

pub use activation::ActivationContext;
pub use quintuplet::{InvalidQuintuplet, Quintuplet};
pub use registry::{ManagedEnvironment, Registry, CONTAINER_DIR, MARKER_NAME};
pub use resolver::{resolve, select, EnvSpec};
