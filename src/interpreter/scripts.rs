//! Python snippets run inside target interpreters.

/// Exit code the creation script uses when `venv` cannot be used.
pub const VENV_UNAVAILABLE: i32 = 715;

/// Prints the interpreter's quintuplet.
///
/// The hash covers the most "base" prefix reachable, crossing both
/// virtualenv (`real_prefix`) and venv (`base_prefix`) boundaries, so an
/// interpreter inside another environment identifies as its base install.
pub const QUINTUPLET: &str = r#"
import hashlib
import platform
import sys
import sysconfig

prefix = getattr(sys, "real_prefix", None) or getattr(sys, "base_prefix", None) or sys.prefix
prefix = prefix.encode(sys.getfilesystemencoding(), "ignore")

parts = [
    platform.python_implementation(),
    sysconfig.get_python_version(),
    platform.uname()[0],
    sysconfig.get_platform().split("-")[-1],
    hashlib.sha256(prefix).hexdigest()[:8],
]
print("-".join(p.replace("-", "_") for p in parts).lower())
"#;

/// Prints the interpreter's executable path; used through the `py` launcher.
pub const EXECUTABLE: &str = "import sys; print(sys.executable)";

/// Creates an environment with `venv`. Arguments: env dir, prompt.
pub const CREATE_VENV: &str = r#"
import os
import sys


def create(env_dir, prompt):
    try:
        import ensurepip  # noqa: F401
        import venv
    except ImportError:
        return 715

    # venv breaks when nested in virtualenv<20.
    if getattr(sys, "real_prefix", None) and not os.path.isfile(
        os.path.join(sys.prefix, "pyvenv.cfg")
    ):
        return 715

    builder = venv.EnvBuilder(
        with_pip=True,
        symlinks=(os.name != "nt"),
        prompt=prompt,
    )
    builder.create(env_dir)
    return 0


sys.exit(create(sys.argv[1], sys.argv[2]))
"#;

/// Exits non-zero when the `virtualenv` package is missing.
pub const HAS_VIRTUALENV: &str = "import virtualenv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_code_matches_script() {
        assert!(CREATE_VENV.contains(&format!("return {}", VENV_UNAVAILABLE)));
    }
}
