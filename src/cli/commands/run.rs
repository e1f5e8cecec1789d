//! Running commands inside an environment.
//!
//! `pyem [--spec SPEC] <cmd> [args...]` picks an environment (the `--spec`
//! match, else the active one), activates it, and hands the process over
//! to `<cmd>`.

use crate::environment::{resolve, ActivationContext, ManagedEnvironment, Registry};
use crate::error::{PyemError, Result};
use crate::interpreter::PythonLauncher;
use crate::shell::launch;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    registry: Registry,
    spec: Option<String>,
    argv: Vec<String>,
    launcher: &'a dyn PythonLauncher,
}

impl<'a> RunCommand<'a> {
    /// `argv` holds the command followed by its arguments.
    pub fn new(
        registry: Registry,
        spec: Option<String>,
        argv: Vec<String>,
        launcher: &'a dyn PythonLauncher,
    ) -> Self {
        Self {
            registry,
            spec,
            argv,
            launcher,
        }
    }

    /// The environment the command runs in.
    pub fn environment(&self) -> Result<ManagedEnvironment> {
        match &self.spec {
            Some(spec) => resolve(spec, &self.registry.list()?, self.launcher),
            None => self.registry.active().ok_or(PyemError::NoActiveEnvironment),
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((command, args)) = self.argv.split_first() else {
            return Err(anyhow::anyhow!("no command given").into());
        };

        let env = self.environment()?;
        tracing::debug!("Running {} in {}", command, env.name());

        let context = ActivationContext::build(&env)?;
        let code = launch(&context, command, args)?;
        Ok(CommandResult::from_exit_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::super::venv::fixtures::{project, CPY37, CPY38};
    use super::*;
    use crate::interpreter::FakeLauncher;
    use crate::ui::MockUI;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn uses_active_environment() {
        let (_temp, registry) = project(&[CPY37, CPY38]);
        let env = registry.list().unwrap().remove(1);
        registry.activate(&env).unwrap();
        let launcher = FakeLauncher::new(CPY37);

        let cmd = RunCommand::new(registry, None, argv(&["python"]), &launcher);
        assert_eq!(cmd.environment().unwrap().name(), CPY38);
    }

    #[test]
    fn spec_overrides_active() {
        let (_temp, registry) = project(&[CPY37, CPY38]);
        let env = registry.list().unwrap().remove(1);
        registry.activate(&env).unwrap();
        let launcher = FakeLauncher::new(CPY37);

        let cmd = RunCommand::new(registry, Some("3.7".into()), argv(&["python"]), &launcher);
        assert_eq!(cmd.environment().unwrap().name(), CPY37);
    }

    #[test]
    fn no_active_environment() {
        let (_temp, registry) = project(&[CPY37]);
        let launcher = FakeLauncher::new(CPY37);
        let mut ui = MockUI::new();

        let err = RunCommand::new(registry, None, argv(&["python"]), &launcher)
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, PyemError::NoActiveEnvironment));
    }

    #[cfg(unix)]
    #[test]
    fn missing_command_is_enoent() {
        let (_temp, registry) = project(&[CPY37]);
        let launcher = FakeLauncher::new(CPY37);
        let mut ui = MockUI::new();

        let err = RunCommand::new(
            registry,
            Some(CPY37.into()),
            argv(&["pyem-test-no-such-command"]),
            &launcher,
        )
        .execute(&mut ui)
        .unwrap_err();
        assert!(matches!(err, PyemError::CommandNotFound { .. }));
        assert_eq!(err.exit_code(), libc::ENOENT);
    }
}
