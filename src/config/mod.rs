//! Project settings.
//!
//! Settings come from an optional `.pyem.yml` at the project root. Every
//! field has a default, so projects without the file behave the same as
//! projects with an empty one.

pub mod loader;
pub mod schema;

pub use loader::{load_settings, parse_settings, settings_path, SETTINGS_FILE};
pub use schema::{Creator, OutputMode, Settings};
