//! Platform helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Quotes preceded by any run of backslashes.
static QUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\\*)""#).expect("QUOTE_REGEX must compile"));

/// Check if running in a CI environment.
///
/// Used to force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

fn quote_if(value: &str, foul: impl Fn(char) -> bool) -> String {
    if !value.chars().any(foul) {
        return value.to_string();
    }
    let escaped = QUOTE_REGEX.replace_all(value, r#"${1}${1}\""#);
    format!("\"{}\"", escaped)
}

/// Encode a command line into a single string for `cmd /C`.
///
/// Mirrors `CreateProcess` quoting: quotes are escaped with a backslash
/// and backslashes directly before a quote are doubled. Values are only
/// wrapped in quotes when they contain whitespace (or parentheses, for the
/// command itself) so built-ins like `echo` and `/switch` arguments keep
/// working.
pub fn cmdify(command: &str, args: &[String]) -> String {
    let mut line = quote_if(command, |c| c.is_whitespace() || c == '(' || c == ')');
    for arg in args {
        line.push(' ');
        line.push_str(&quote_if(arg, char::is_whitespace));
    }
    line
}
