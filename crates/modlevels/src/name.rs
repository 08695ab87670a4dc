//! Logger-name syntax.

use regex::Regex;
use std::sync::LazyLock;

/// Dot-separated segments of alphanumerics, `_`, `#`, `:` and `-`.
static LOGGER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]_#:-]+(\.[[:alnum:]_#:-]+)*$").expect("valid logger name pattern")
});

/// Whether `name` is a valid logger name. Empty segments, leading or
/// trailing dots, and characters outside the allowed set are rejected.
pub fn is_valid_logger_name(name: &str) -> bool {
    LOGGER_NAME.is_match(name)
}

/// Validate an override key. A single trailing `.` marks an exact-match key
/// and is ignored for the syntax check.
pub(crate) fn is_valid_override_key(key: &str) -> bool {
    is_valid_logger_name(key.strip_suffix('.').unwrap_or(key))
}
