//! Environment specifier resolution.
//!
//! Resolves a user-supplied specifier to exactly one managed environment.
//! A specifier takes one of these forms:
//!
//! 1. A single fragment: version (`3.7`), implementation (`cpython`), or
//!    the start of the hash (`3d37`)
//! 2. Implementation + version (`cpython-3.7`)
//! 3. Implementation + version + arch (`cpython-3.7-x86_64`)
//! 4. Full identifier minus the hash (`cpython-3.7-darwin-x86_64`)
//! 5. Full identifier, hash may be shortened (`cpython-3.7-darwin-x86_64-3d3725a6`)
//! 6. Path to a Python interpreter, matched by its own quintuplet
//!
//! Matching is case-insensitive. Empty components (`cpython--darwin`) match
//! anything. When several environments match, one named exactly like the
//! specifier wins, then those whose whole hash was given.

use std::path::Path;

use crate::error::{PyemError, Result};
use crate::interpreter::{looks_like_path, PythonLauncher};

use super::quintuplet::Quintuplet;
use super::registry::ManagedEnvironment;

/// Shortest single fragment compared against hashes.
pub const MIN_HASH_FRAGMENT: usize = 4;

/// A parsed environment specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSpec {
    /// One component; matches implementation, version, or a hash prefix of
    /// at least [`MIN_HASH_FRAGMENT`] characters.
    Fragment(String),
    /// Positional components. `None` matches anything; the hash matches by prefix.
    Components {
        implementation: Option<String>,
        version: Option<String>,
        platform: Option<String>,
        arch: Option<String>,
        hash: Option<String>,
    },
}

fn component(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_lowercase())
    }
}

impl EnvSpec {
    /// Parse a textual specifier. Returns `None` if it cannot match anything.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return None;
        }

        let parts: Vec<&str> = spec.split('-').collect();
        let (implementation, version, platform, arch, hash) = match parts.as_slice() {
            [single] => return Some(Self::Fragment(single.to_lowercase())),
            [i, v] => (*i, *v, "", "", ""),
            [i, v, a] => (*i, *v, "", *a, ""),
            [i, v, p, a] => (*i, *v, *p, *a, ""),
            [i, v, p, a, h] => (*i, *v, *p, *a, *h),
            _ => return None,
        };

        Some(Self::Components {
            implementation: component(implementation),
            version: component(version),
            platform: component(platform),
            arch: component(arch),
            hash: component(hash),
        })
    }

    /// A specifier matching exactly `quintuplet`.
    pub fn exact(quintuplet: &Quintuplet) -> Self {
        let [implementation, version, platform, arch, hash] = quintuplet.components();
        Self::Components {
            implementation: Some(implementation),
            version: Some(version),
            platform: Some(platform),
            arch: Some(arch),
            hash: Some(hash),
        }
    }

    /// Check whether `quintuplet` satisfies this specifier.
    pub fn matches(&self, quintuplet: &Quintuplet) -> bool {
        let [q_impl, q_version, q_platform, q_arch, q_hash] = quintuplet.components();
        match self {
            Self::Fragment(fragment) => {
                *fragment == q_impl
                    || *fragment == q_version
                    || (fragment.len() >= MIN_HASH_FRAGMENT && q_hash.starts_with(fragment.as_str()))
            }
            Self::Components {
                implementation,
                version,
                platform,
                arch,
                hash,
            } => {
                let wanted = [implementation, version, platform, arch];
                let have = [&q_impl, &q_version, &q_platform, &q_arch];
                let positional = wanted.iter().zip(have).all(|(want, have)| match want {
                    Some(w) => w == have,
                    None => true,
                });
                let hashed = match hash {
                    Some(h) => q_hash.starts_with(h.as_str()),
                    None => true,
                };
                positional && hashed
            }
        }
    }

    /// Like [`EnvSpec::matches`], but the hash must be given in full.
    fn matches_full_hash(&self, quintuplet: &Quintuplet) -> bool {
        match self {
            Self::Components { hash: Some(h), .. } => {
                quintuplet.hash().eq_ignore_ascii_case(h) && self.matches(quintuplet)
            }
            _ => false,
        }
    }
}

/// Resolve `spec` against `envs`.
///
/// A specifier that looks like a path to an existing file is treated as an
/// interpreter and matched by the quintuplet `launcher` reports for it.
pub fn resolve(
    spec: &str,
    envs: &[ManagedEnvironment],
    launcher: &dyn PythonLauncher,
) -> Result<ManagedEnvironment> {
    let parsed = if looks_like_path(spec) && Path::new(spec).is_file() {
        let quintuplet = launcher.quintuplet(Path::new(spec))?;
        tracing::debug!("Interpreter {} identifies as {}", spec, quintuplet);
        Some(EnvSpec::exact(&quintuplet))
    } else {
        EnvSpec::parse(spec)
    };
    select(spec, parsed.as_ref(), envs)
}

/// Pick the single environment matching `parsed`.
///
/// `spec` is the user's original text, used for error reporting.
pub fn select(
    spec: &str,
    parsed: Option<&EnvSpec>,
    envs: &[ManagedEnvironment],
) -> Result<ManagedEnvironment> {
    let mut matches: Vec<&ManagedEnvironment> = match parsed {
        Some(p) => envs.iter().filter(|e| p.matches(&e.quintuplet)).collect(),
        None => Vec::new(),
    };
    if matches.len() > 1 {
        matches = narrow(spec.trim(), parsed, matches);
    }
    matches.sort_by(|a, b| a.quintuplet.cmp(&b.quintuplet));

    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => {
            let mut tried: Vec<Quintuplet> = envs.iter().map(|e| e.quintuplet.clone()).collect();
            tried.sort();
            Err(PyemError::EnvironmentNotFound {
                spec: spec.to_string(),
                tried,
            })
        }
        _ => Err(PyemError::AmbiguousSpec {
            spec: spec.to_string(),
            matches: matches.iter().map(|e| e.quintuplet.clone()).collect(),
        }),
    }
}

/// Prefer the environment named exactly `spec`, then full-hash matches.
fn narrow<'a>(
    spec: &str,
    parsed: Option<&EnvSpec>,
    matches: Vec<&'a ManagedEnvironment>,
) -> Vec<&'a ManagedEnvironment> {
    if let Some(exact) = matches.iter().find(|e| e.name() == spec) {
        return vec![*exact];
    }
    let full: Vec<&ManagedEnvironment> = matches
        .iter()
        .copied()
        .filter(|e| parsed.is_some_and(|p| p.matches_full_hash(&e.quintuplet)))
        .collect();
    if full.is_empty() {
        matches
    } else {
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::FakeLauncher;
    use std::path::PathBuf;

    fn env(name: &str) -> ManagedEnvironment {
        ManagedEnvironment::new(name.parse().unwrap(), PathBuf::from("/p/.venvs").join(name))
    }

    fn registry() -> Vec<ManagedEnvironment> {
        vec![
            env("pypy-3.9-linux-x86_64-9f00aa11"),
            env("cpython-3.10-linux-x86_64-1234abcd"),
            env("cpython-3.8-linux-x86_64-3d3725a6"),
            env("cpython-3.8-linux-i686-77aa0011"),
            env("cpython-3.8-darwin-arm64-5e5e5e5e"),
        ]
    }

    fn resolve_name(spec: &str) -> Result<String> {
        let parsed = EnvSpec::parse(spec);
        select(spec, parsed.as_ref(), &registry()).map(|e| e.name().to_string())
    }

    fn ambiguous_names(spec: &str) -> Vec<String> {
        match resolve_name(spec) {
            Err(PyemError::AmbiguousSpec { matches, .. }) => {
                matches.iter().map(|q| q.to_string()).collect()
            }
            other => panic!("expected ambiguity for {spec:?}, got {other:?}"),
        }
    }

    #[test]
    fn full_quintuplet_resolves_to_itself() {
        for e in registry() {
            assert_eq!(resolve_name(e.name()).unwrap(), e.name());
        }
    }

    #[test]
    fn unique_version_resolves() {
        assert_eq!(
            resolve_name("3.10").unwrap(),
            "cpython-3.10-linux-x86_64-1234abcd"
        );
    }

    #[test]
    fn version_does_not_match_as_substring() {
        assert!(matches!(
            resolve_name("3.1"),
            Err(PyemError::EnvironmentNotFound { .. })
        ));
    }

    #[test]
    fn unique_implementation_resolves() {
        assert_eq!(resolve_name("pypy").unwrap(), "pypy-3.9-linux-x86_64-9f00aa11");
    }

    #[test]
    fn hash_fragment_resolves() {
        assert_eq!(
            resolve_name("3d37").unwrap(),
            "cpython-3.8-linux-x86_64-3d3725a6"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve_name("PyPy").unwrap(), "pypy-3.9-linux-x86_64-9f00aa11");
        assert_eq!(
            resolve_name("CPython-3.8-Linux-X86_64").unwrap(),
            "cpython-3.8-linux-x86_64-3d3725a6"
        );
    }

    #[test]
    fn ambiguous_version_lists_all_and_only_matches_sorted() {
        assert_eq!(
            ambiguous_names("3.8"),
            vec![
                "cpython-3.8-darwin-arm64-5e5e5e5e",
                "cpython-3.8-linux-i686-77aa0011",
                "cpython-3.8-linux-x86_64-3d3725a6",
            ]
        );
    }

    #[test]
    fn ambiguous_implementation_lists_matches() {
        assert_eq!(ambiguous_names("cpython").len(), 4);
    }

    #[test]
    fn implementation_and_version() {
        assert_eq!(ambiguous_names("cpython-3.8").len(), 3);
        assert_eq!(
            resolve_name("pypy-3.9").unwrap(),
            "pypy-3.9-linux-x86_64-9f00aa11"
        );
    }

    #[test]
    fn three_parts_select_arch() {
        assert_eq!(
            resolve_name("cpython-3.8-i686").unwrap(),
            "cpython-3.8-linux-i686-77aa0011"
        );
        assert_eq!(
            resolve_name("cpython-3.8-arm64").unwrap(),
            "cpython-3.8-darwin-arm64-5e5e5e5e"
        );
    }

    #[test]
    fn four_parts_select_platform_and_arch() {
        assert_eq!(
            resolve_name("cpython-3.8-linux-x86_64").unwrap(),
            "cpython-3.8-linux-x86_64-3d3725a6"
        );
    }

    #[test]
    fn five_parts_accept_hash_prefix() {
        assert_eq!(
            resolve_name("cpython-3.8-linux-x86_64-3d").unwrap(),
            "cpython-3.8-linux-x86_64-3d3725a6"
        );
        assert!(resolve_name("cpython-3.8-linux-x86_64-ffff").is_err());
    }

    #[test]
    fn short_fragment_is_not_a_hash() {
        assert!(matches!(
            resolve_name("3"),
            Err(PyemError::EnvironmentNotFound { .. })
        ));
        assert!(matches!(
            resolve_name("3d3"),
            Err(PyemError::EnvironmentNotFound { .. })
        ));
        assert_eq!(
            resolve_name("1234").unwrap(),
            "cpython-3.10-linux-x86_64-1234abcd"
        );
    }

    #[test]
    fn full_name_wins_over_longer_hash() {
        let envs = vec![
            env("cpython-3.8-linux-x86_64-abc"),
            env("cpython-3.8-linux-x86_64-abcd"),
        ];
        let spec = "cpython-3.8-linux-x86_64-abc";
        let found = select(spec, EnvSpec::parse(spec).as_ref(), &envs).unwrap();
        assert_eq!(found.name(), spec);

        let upper = "CPYTHON-3.8-LINUX-X86_64-ABC";
        let found = select(upper, EnvSpec::parse(upper).as_ref(), &envs).unwrap();
        assert_eq!(found.name(), spec);

        let prefix = "cpython-3.8-linux-x86_64-ab";
        assert!(matches!(
            select(prefix, EnvSpec::parse(prefix).as_ref(), &envs),
            Err(PyemError::AmbiguousSpec { .. })
        ));
    }

    #[test]
    fn full_name_wins_over_case_twin() {
        let envs = vec![
            env("CPython-3.8-linux-x86_64-3d3725a6"),
            env("cpython-3.8-linux-x86_64-3d3725a6"),
        ];
        for e in &envs {
            let found = select(e.name(), EnvSpec::parse(e.name()).as_ref(), &envs).unwrap();
            assert_eq!(found.name(), e.name());
        }
    }

    #[test]
    fn empty_components_are_wildcards() {
        assert_eq!(
            resolve_name("cpython--darwin-").unwrap(),
            "cpython-3.8-darwin-arm64-5e5e5e5e"
        );
    }

    #[test]
    fn too_many_parts_is_not_found_with_all_tried() {
        match resolve_name("a-b-c-d-e-f") {
            Err(PyemError::EnvironmentNotFound { spec, tried }) => {
                assert_eq!(spec, "a-b-c-d-e-f");
                assert_eq!(tried.len(), 5);
                let mut sorted = tried.clone();
                sorted.sort();
                assert_eq!(tried, sorted);
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn empty_spec_is_not_found() {
        assert!(EnvSpec::parse("  ").is_none());
        assert!(matches!(
            resolve_name(""),
            Err(PyemError::EnvironmentNotFound { .. })
        ));
    }

    #[test]
    fn empty_registry_is_not_found() {
        let err = select("3.8", EnvSpec::parse("3.8").as_ref(), &[]).unwrap_err();
        match err {
            PyemError::EnvironmentNotFound { tried, .. } => assert!(tried.is_empty()),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn interpreter_path_matches_its_quintuplet() {
        let temp = tempfile::TempDir::new().unwrap();
        let python = temp.path().join("python3");
        std::fs::write(&python, "").unwrap();

        let launcher = FakeLauncher::new("cpython-3.8-linux-i686-77aa0011");
        let found = resolve(python.to_str().unwrap(), &registry(), &launcher).unwrap();
        assert_eq!(found.name(), "cpython-3.8-linux-i686-77aa0011");
    }

    #[test]
    fn missing_path_is_parsed_as_text() {
        let launcher = FakeLauncher::new("cpython-3.8-linux-i686-77aa0011");
        let err = resolve("/does/not/exist", &registry(), &launcher).unwrap_err();
        assert!(matches!(err, PyemError::EnvironmentNotFound { .. }));
    }
}
