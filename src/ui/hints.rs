//! Follow-up suggestions shown after commands.

/// After `venv add` created `name`.
pub fn after_add(name: &str) -> String {
    format!("Run `pyem venv set {}` to make it the default.", name)
}

/// When a project has no environments yet.
pub fn no_environments() -> &'static str {
    "Run `pyem venv add <python>` to create one."
}

/// When environments exist but none is active.
pub fn none_active() -> &'static str {
    "Run `pyem venv set <spec>` to choose one."
}
