//! `pyem venv` subcommands.

mod add;
mod list;
mod remove;
mod set;
mod show;

pub use add::AddCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use set::{SetCommand, UnsetCommand};
pub use show::ShowCommand;
