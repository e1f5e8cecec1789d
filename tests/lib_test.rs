//! Library integration tests.

use std::fs;
use std::path::PathBuf;

use pyem::environment::{select, EnvSpec, ManagedEnvironment, Registry};
use pyem::PyemError;
use tempfile::TempDir;

const NAMES: &[&str] = &[
    "cpython-3.7-darwin-x86_64-3d3725a6",
    "cpython-3.7-darwin-x86_64-3d37ffff",
    "cpython-3.8-darwin-x86_64-77aa0011",
    "cpython-3.8-linux-i686-77aa0022",
    "pypy-3.7-darwin-x86_64-5b2c7e90",
    "cpython-3.10-windows-amd64-0a0b0c0d",
];

fn envs() -> Vec<ManagedEnvironment> {
    NAMES
        .iter()
        .map(|name| ManagedEnvironment::new(name.parse().unwrap(), PathBuf::from(name)))
        .collect()
}

fn lookup(spec: &str, envs: &[ManagedEnvironment]) -> pyem::Result<ManagedEnvironment> {
    select(spec, EnvSpec::parse(spec).as_ref(), envs)
}

#[test]
fn full_quintuplet_always_resolves_to_itself() {
    let envs = envs();
    for name in NAMES {
        let found = lookup(name, &envs).unwrap();
        assert_eq!(found.name(), *name);
    }
}

#[test]
fn full_quintuplet_resolves_in_any_subset() {
    let all = envs();
    for skip in 0..all.len() {
        let subset: Vec<_> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, e)| e.clone())
            .collect();
        for env in &subset {
            assert_eq!(lookup(env.name(), &subset).unwrap().name(), env.name());
        }
    }
}

#[test]
fn ambiguous_fragments_list_all_and_only_matches() {
    let envs = envs();
    let cases: &[(&str, &[&str])] = &[
        (
            "3.7",
            &[
                "cpython-3.7-darwin-x86_64-3d3725a6",
                "cpython-3.7-darwin-x86_64-3d37ffff",
                "pypy-3.7-darwin-x86_64-5b2c7e90",
            ],
        ),
        (
            "cpython",
            &[
                "cpython-3.10-windows-amd64-0a0b0c0d",
                "cpython-3.7-darwin-x86_64-3d3725a6",
                "cpython-3.7-darwin-x86_64-3d37ffff",
                "cpython-3.8-darwin-x86_64-77aa0011",
                "cpython-3.8-linux-i686-77aa0022",
            ],
        ),
        (
            "3.8",
            &[
                "cpython-3.8-darwin-x86_64-77aa0011",
                "cpython-3.8-linux-i686-77aa0022",
            ],
        ),
        (
            "cpython-3.8",
            &[
                "cpython-3.8-darwin-x86_64-77aa0011",
                "cpython-3.8-linux-i686-77aa0022",
            ],
        ),
        (
            "3d37",
            &[
                "cpython-3.7-darwin-x86_64-3d3725a6",
                "cpython-3.7-darwin-x86_64-3d37ffff",
            ],
        ),
    ];

    for (spec, expected) in cases {
        match lookup(spec, &envs) {
            Err(PyemError::AmbiguousSpec { matches, .. }) => {
                let got: Vec<&str> = matches.iter().map(|q| q.as_str()).collect();
                assert_eq!(got, *expected, "{spec}");
            }
            other => panic!("{spec}: expected ambiguity, got {other:?}"),
        }
    }
}

#[test]
fn full_quintuplet_resolves_among_prefix_and_case_twins() {
    let names = [
        "cpython-3.8-linux-x86_64-abc",
        "cpython-3.8-linux-x86_64-abcd",
        "CPython-3.8-linux-x86_64-3d3725a6",
        "cpython-3.8-linux-x86_64-3d3725a6",
    ];
    let envs: Vec<ManagedEnvironment> = names
        .iter()
        .map(|name| ManagedEnvironment::new(name.parse().unwrap(), PathBuf::from(name)))
        .collect();

    for name in names {
        assert_eq!(lookup(name, &envs).unwrap().name(), name);
    }
}

#[test]
fn unique_fragments_resolve() {
    let envs = envs();
    assert_eq!(
        lookup("pypy", &envs).unwrap().name(),
        "pypy-3.7-darwin-x86_64-5b2c7e90"
    );
    assert_eq!(
        lookup("cpython-3.8-i686", &envs).unwrap().name(),
        "cpython-3.8-linux-i686-77aa0022"
    );
    assert_eq!(
        lookup("3.10", &envs).unwrap().name(),
        "cpython-3.10-windows-amd64-0a0b0c0d"
    );
}

#[test]
fn registry_round_trip_on_disk() {
    let temp = TempDir::new().unwrap();
    for name in NAMES {
        fs::create_dir_all(temp.path().join(".venvs").join(name)).unwrap();
    }
    let registry = Registry::new(temp.path());

    let listed = registry.list().unwrap();
    let names: Vec<&str> = listed.iter().map(|e| e.name()).collect();
    let mut sorted = NAMES.to_vec();
    sorted.sort();
    assert_eq!(names, sorted);

    let env = lookup("pypy", &listed).unwrap();
    registry.activate(&env).unwrap();
    assert_eq!(registry.active().unwrap().name(), env.name());
}

#[test]
fn error_types_are_public() {
    let err = PyemError::NoActiveEnvironment;
    assert_eq!(err.exit_code(), 6);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pyem::cli::{Cli, Commands, VenvCommand};

    let cli = Cli::parse_from(["pyem", "venv", "remove", "pypy"]);
    match cli.command {
        Some(Commands::Venv(args)) => {
            assert!(matches!(args.command, VenvCommand::Remove { target } if target == "pypy"));
        }
        other => panic!("expected venv command, got {other:?}"),
    }
}
