//! `pyem venv list`.

use crate::cli::args::ListFormat;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::environment::{ManagedEnvironment, Registry};
use crate::error::Result;
use crate::ui::{hints, PyemTheme, Table, UserInterface};

/// Width of the rule under the plain-format header.
const RULE_WIDTH: usize = 45;

/// The list command implementation.
pub struct ListCommand {
    registry: Registry,
    format: ListFormat,
}

impl ListCommand {
    pub fn new(registry: Registry, format: ListFormat) -> Self {
        Self { registry, format }
    }

    fn plain(envs: &[ManagedEnvironment]) -> String {
        let mut lines = vec!["  Quintuplet".to_string(), "=".repeat(RULE_WIDTH)];
        lines.extend(envs.iter().map(|env| {
            let marker = if env.active { '*' } else { ' ' };
            format!("{} {}", marker, env.name())
        }));
        lines.join("\n")
    }

    fn table(envs: &[ManagedEnvironment], theme: &PyemTheme) -> String {
        let mut table = Table::new(&["", "Quintuplet", "Path"]);
        for env in envs {
            let (marker, name) = if env.active {
                (
                    theme.active.apply_to("*").to_string(),
                    theme.active.apply_to(env.name()).to_string(),
                )
            } else {
                (String::new(), env.name().to_string())
            };
            table.add_row([marker, name, env.path.display().to_string()]);
        }
        table.render()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let envs = self.registry.list()?;

        let output = match self.format {
            ListFormat::Plain => Self::plain(&envs),
            ListFormat::Table => Self::table(&envs, &PyemTheme::detect()),
            ListFormat::Json => serde_json::to_string_pretty(&envs).map_err(anyhow::Error::from)?,
        };
        ui.print(&output);

        if self.format != ListFormat::Json {
            if envs.is_empty() {
                ui.show_hint(hints::no_environments());
            } else if !envs.iter().any(|env| env.active) {
                ui.show_hint(hints::none_active());
            }
        }
        Ok(CommandResult::success())
    }
}
