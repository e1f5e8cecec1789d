//! `pyem venv show`.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::environment::Registry;
use crate::error::{PyemError, Result};
use crate::ui::{OutputMode, UserInterface};

/// Print the active environment's quintuplet.
///
/// In verbose mode the environment's location, interpreter and
/// `site-packages` follow on stderr.
pub struct ShowCommand {
    registry: Registry,
}

impl ShowCommand {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self
            .registry
            .active()
            .ok_or(PyemError::NoActiveEnvironment)?;
        ui.print(env.name());

        if ui.output_mode() == OutputMode::Verbose {
            let describe = |found: Result<std::path::PathBuf>| match found {
                Ok(path) => path.display().to_string(),
                Err(_) => "(missing)".to_string(),
            };
            ui.message(&format!("  path:          {}", env.path.display()));
            ui.message(&format!("  python:        {}", describe(env.python())));
            ui.message(&format!("  site-packages: {}", describe(env.site_packages())));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{project, CPY37, CPY38};
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_active_name() {
        let (_temp, registry) = project(&[CPY37, CPY38]);
        let env = registry.list().unwrap().remove(1);
        registry.activate(&env).unwrap();

        let mut ui = MockUI::new();
        ShowCommand::new(registry).execute(&mut ui).unwrap();
        assert_eq!(ui.printed(), [CPY38]);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn verbose_shows_details() {
        let (_temp, registry) = project(&[CPY37]);
        let env = registry.list().unwrap().remove(0);
        registry.activate(&env).unwrap();

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ShowCommand::new(registry).execute(&mut ui).unwrap();
        assert_eq!(ui.messages().len(), 3);
        assert!(ui.messages()[1].contains("(missing)"));
    }

    #[test]
    fn no_active_environment() {
        let (_temp, registry) = project(&[CPY37]);
        let mut ui = MockUI::new();
        let err = ShowCommand::new(registry).execute(&mut ui).unwrap_err();
        assert!(matches!(err, PyemError::NoActiveEnvironment));
        assert_eq!(err.exit_code(), 6);
    }
}
