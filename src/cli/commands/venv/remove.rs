//! `pyem venv remove`.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::environment::{resolve, Registry};
use crate::error::Result;
use crate::interpreter::PythonLauncher;
use crate::ui::UserInterface;

/// Delete the environment matching `target`.
pub struct RemoveCommand<'a> {
    registry: Registry,
    target: &'a str,
    launcher: &'a dyn PythonLauncher,
}

impl<'a> RemoveCommand<'a> {
    pub fn new(registry: Registry, target: &'a str, launcher: &'a dyn PythonLauncher) -> Self {
        Self {
            registry,
            target,
            launcher,
        }
    }
}

impl Command for RemoveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let envs = self.registry.list()?;
        let env = resolve(self.target, &envs, self.launcher)?;
        self.registry.remove(&env)?;
        ui.success(&format!("Removed {}", env.name()));
        Ok(CommandResult::success())
    }
}
