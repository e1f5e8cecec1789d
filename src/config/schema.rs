//! Settings file schema.
//!
//! Maps the optional `.pyem.yml` at the project root.

use serde::{Deserialize, Serialize};

/// Project settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prompt shown by activated shells (defaults to the project name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Tool used to create environments
    pub creator: Creator,

    /// Default output mode when no CLI flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl Settings {
    /// Prompt for new environments in the project named `project_name`.
    pub fn prompt_or<'a>(&'a self, project_name: &'a str) -> &'a str {
        self.prompt.as_deref().unwrap_or(project_name)
    }
}

/// How environments are created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Creator {
    /// `venv`, falling back to `virtualenv` when `venv` is unusable.
    #[default]
    Auto,
    /// The standard library `venv` module only.
    Venv,
    /// The `virtualenv` package only.
    Virtualenv,
}

/// Output mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}
