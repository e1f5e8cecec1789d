//! `pyem venv add`: create an environment from a base interpreter.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::environment::Registry;
use crate::error::Result;
use crate::interpreter::PythonLauncher;
use crate::ui::{hints, UserInterface};

/// The add command implementation.
pub struct AddCommand<'a> {
    registry: Registry,
    python: &'a str,
    prompt: &'a str,
    launcher: &'a dyn PythonLauncher,
}

impl<'a> AddCommand<'a> {
    pub fn new(
        registry: Registry,
        python: &'a str,
        prompt: &'a str,
        launcher: &'a dyn PythonLauncher,
    ) -> Self {
        Self {
            registry,
            python,
            prompt,
            launcher,
        }
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut spinner = ui.start_spinner(&format!("Creating environment from {}", self.python));

        match self.registry.create(self.launcher, self.python, self.prompt) {
            Ok(env) => {
                spinner.finish_success(&format!("Created {}", env.name()));
                ui.show_hint(&hints::after_add(env.name()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error(&format!("Could not create environment from {}", self.python));
                Err(e)
            }
        }
    }
}
