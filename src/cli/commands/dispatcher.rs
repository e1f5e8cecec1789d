//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands, VenvCommand};
use crate::config::Settings;
use crate::error::Result;
use crate::interpreter::SystemLauncher;
use crate::project::Project;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::run::RunCommand;
use super::venv::{
    AddCommand, ListCommand, RemoveCommand, SetCommand, ShowCommand, UnsetCommand,
};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result mirroring a child process's exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_override: Option<PathBuf>,
    spec: Option<String>,
    output_from_flags: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher; `project_override` skips upward discovery.
    pub fn new(project_override: Option<PathBuf>, spec: Option<String>) -> Self {
        Self {
            project_override,
            spec,
            output_from_flags: false,
        }
    }

    /// Record that `-v`/`-q` chose the output mode, so settings leave it alone.
    pub fn output_from_flags(mut self, from_flags: bool) -> Self {
        self.output_from_flags = from_flags;
        self
    }

    /// Discover the project and apply its settings to `ui`.
    fn open_project(&self, ui: &mut dyn UserInterface) -> Result<(Project, Settings)> {
        let project = Project::discover(self.project_override.as_deref())?;
        tracing::debug!("Project root: {}", project.root().display());

        let settings = project.settings()?;
        if !self.output_from_flags {
            if let Some(mode) = settings.output {
                ui.set_output_mode(mode.into());
            }
        }
        Ok((project, settings))
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Venv(args)) => {
                let (project, settings) = self.open_project(ui)?;
                let launcher = SystemLauncher::new(settings.creator);
                let registry = project.registry();

                match &args.command {
                    VenvCommand::Add { python } => {
                        let prompt = settings.prompt_or(project.name());
                        AddCommand::new(registry, python, prompt, &launcher).execute(ui)
                    }
                    VenvCommand::List { format } => ListCommand::new(registry, *format).execute(ui),
                    VenvCommand::Set { target } => {
                        SetCommand::new(registry, target, &launcher).execute(ui)
                    }
                    VenvCommand::Show => ShowCommand::new(registry).execute(ui),
                    VenvCommand::Unset => UnsetCommand::new(registry).execute(ui),
                    VenvCommand::Remove { target } => {
                        RemoveCommand::new(registry, target, &launcher).execute(ui)
                    }
                }
            }
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            Some(Commands::External(argv)) => {
                let (project, settings) = self.open_project(ui)?;
                let launcher = SystemLauncher::new(settings.creator);
                RunCommand::new(project.registry(), self.spec.clone(), argv.clone(), &launcher)
                    .execute(ui)
            }
            None => {
                ui.print(&Cli::command().render_help().to_string());
                Ok(CommandResult::success())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PyemError;
    use crate::ui::{MockUI, OutputMode};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_settings(settings: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "").unwrap();
        fs::write(temp.path().join(".pyem.yml"), settings).unwrap();
        temp
    }

    #[test]
    fn command_result_constructors() {
        assert!(CommandResult::success().success);
        assert_eq!(CommandResult::failure(3).exit_code, 3);
        assert!(!CommandResult::from_exit_code(1).success);
        assert!(CommandResult::from_exit_code(0).success);
    }

    #[test]
    fn no_command_prints_help() {
        let cli = Cli::parse_from(["pyem"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(None, None).dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.printed()[0].contains("venv"));
    }

    #[test]
    fn missing_project_fails() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["pyem", "venv", "list"]);
        let mut ui = MockUI::new();
        let err = CommandDispatcher::new(Some(temp.path().to_path_buf()), None)
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(matches!(err, PyemError::ProjectNotFound { .. }));
    }

    #[test]
    fn settings_output_applies_without_flags() {
        let temp = project_with_settings("output: silent\n");
        let cli = Cli::parse_from(["pyem", "venv", "list"]);
        let mut ui = MockUI::new();
        CommandDispatcher::new(Some(temp.path().to_path_buf()), None)
            .dispatch(&cli, &mut ui)
            .unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn flags_override_settings_output() {
        let temp = project_with_settings("output: silent\n");
        let cli = Cli::parse_from(["pyem", "venv", "list"]);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        CommandDispatcher::new(Some(temp.path().to_path_buf()), None)
            .output_from_flags(true)
            .dispatch(&cli, &mut ui)
            .unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn bad_settings_are_reported() {
        let temp = project_with_settings("colour: blue\n");
        let cli = Cli::parse_from(["pyem", "venv", "list"]);
        let mut ui = MockUI::new();
        let err = CommandDispatcher::new(Some(temp.path().to_path_buf()), None)
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(matches!(err, PyemError::ConfigParseError { .. }));
    }
}
