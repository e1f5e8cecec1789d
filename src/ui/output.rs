//! Output verbosity.

use crate::config::schema;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including debug-level chatter from interpreters.
    Verbose,
    /// Status messages and spinners.
    #[default]
    Normal,
    /// Spinners and final status only.
    Quiet,
    /// Nothing except errors and command results.
    Silent,
}

impl From<schema::OutputMode> for OutputMode {
    fn from(mode: schema::OutputMode) -> Self {
        match mode {
            schema::OutputMode::Verbose => Self::Verbose,
            schema::OutputMode::Normal => Self::Normal,
            schema::OutputMode::Quiet => Self::Quiet,
            schema::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Pick the mode from command-line flags; `--quiet` wins over `--verbose`.
    ///
    /// Returns `None` when neither flag was given, so settings can decide.
    pub fn from_flags(verbose: bool, quiet: bool) -> Option<Self> {
        if quiet {
            Some(Self::Quiet)
        } else if verbose {
            Some(Self::Verbose)
        } else {
            None
        }
    }

    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    pub fn shows_hints(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
