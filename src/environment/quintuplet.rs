//! Interpreter quintuplets.
//!
//! A quintuplet names a managed environment after the interpreter it was
//! built from: `implementation-version-platform-arch-hash`, for example
//! `cpython-3.7-darwin-x86_64-3d3725a6`. The hash is the first eight hex
//! characters of a SHA-256 over the interpreter's base prefix, which keeps
//! two installs of the same version apart.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Identity of a managed environment.
///
/// The original spelling is kept so the name maps back to its directory;
/// matching against it is case-insensitive (see [`Quintuplet::components`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quintuplet {
    name: String,
}

/// Error returned when a string is not a quintuplet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuintuplet(pub String);

impl fmt::Display for InvalidQuintuplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a quintuplet: {:?}", self.0)
    }
}

impl std::error::Error for InvalidQuintuplet {}

impl Quintuplet {
    /// The full identity string.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    fn part(&self, index: usize) -> &str {
        self.name.split('-').nth(index).unwrap_or("")
    }

    /// Python implementation, e.g. `cpython`.
    pub fn implementation(&self) -> &str {
        self.part(0)
    }

    /// `major.minor` version, e.g. `3.7`.
    pub fn version(&self) -> &str {
        self.part(1)
    }

    /// Operating system name, e.g. `darwin`.
    pub fn platform(&self) -> &str {
        self.part(2)
    }

    /// Processor architecture, e.g. `x86_64`.
    pub fn arch(&self) -> &str {
        self.part(3)
    }

    /// Eight-character prefix hash.
    pub fn hash(&self) -> &str {
        self.part(4)
    }

    /// Lowercased components in order, for matching.
    pub fn components(&self) -> [String; 5] {
        [
            self.implementation().to_lowercase(),
            self.version().to_lowercase(),
            self.platform().to_lowercase(),
            self.arch().to_lowercase(),
            self.hash().to_lowercase(),
        ]
    }
}

impl FromStr for Quintuplet {
    type Err = InvalidQuintuplet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 5 || parts.iter().any(|p| p.is_empty()) {
            return Err(InvalidQuintuplet(s.to_string()));
        }
        Ok(Self {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Quintuplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Ord for Quintuplet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Quintuplet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Quintuplet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
