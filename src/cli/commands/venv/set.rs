//! `pyem venv set` and `pyem venv unset`.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::environment::{resolve, Registry};
use crate::error::Result;
use crate::interpreter::PythonLauncher;
use crate::ui::UserInterface;

/// Make the environment matching `target` the active one.
pub struct SetCommand<'a> {
    registry: Registry,
    target: &'a str,
    launcher: &'a dyn PythonLauncher,
}

impl<'a> SetCommand<'a> {
    pub fn new(registry: Registry, target: &'a str, launcher: &'a dyn PythonLauncher) -> Self {
        Self {
            registry,
            target,
            launcher,
        }
    }
}

impl Command for SetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let envs = self.registry.list()?;
        let env = resolve(self.target, &envs, self.launcher)?;

        if env.active {
            ui.message(&format!("{} is already active", env.name()));
        } else {
            self.registry.activate(&env)?;
            ui.success(&format!("Switched to {}", env.name()));
        }
        Ok(CommandResult::success())
    }
}

/// Clear the active environment.
pub struct UnsetCommand {
    registry: Registry,
}

impl UnsetCommand {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

impl Command for UnsetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.registry.deactivate()? {
            ui.success("Cleared the active environment");
        } else {
            ui.message("No active environment");
        }
        Ok(CommandResult::success())
    }
}
