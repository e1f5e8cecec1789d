//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// pyem - Per-project Python virtual environment manager.
#[derive(Debug, Parser)]
#[command(name = "pyem")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root, or a file inside it (no upward search)
    #[arg(long, global = true, env = "PYEM_PROJECT", value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Environment to run commands in (defaults to the active one)
    #[arg(long, global = true, env = "PYEM_SPEC", value_name = "SPEC")]
    pub spec: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the project's environments
    Venv(VenvArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Run a command inside an environment
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Arguments for the `venv` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct VenvArgs {
    #[command(subcommand)]
    pub command: VenvCommand,
}

/// `venv` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum VenvCommand {
    /// Create an environment from a base interpreter
    Add {
        /// Version (`3.11`, via the py launcher), interpreter path, or command name
        python: String,
    },

    /// List environments
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Plain)]
        format: ListFormat,
    },

    /// Make an environment the default for commands
    Set {
        /// Environment specifier
        #[arg(value_name = "SPEC")]
        target: String,
    },

    /// Show the active environment
    Show,

    /// Clear the active environment
    Unset,

    /// Delete an environment
    Remove {
        /// Environment specifier
        #[arg(value_name = "SPEC")]
        target: String,
    },
}

/// Output formats for `venv list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Plain,
    Table,
    Json,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
