//! Severity scale and name conversions.

use crate::error::LevelParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity threshold, most verbose first.
///
/// `Disabled` sorts above every emitting level and silences a logger.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Level {
    /// Full message payloads, below debug.
    Payload,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Error that panics in development builds.
    DPanic,
    Panic,
    Fatal,
    Disabled,
}

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Level; 9] = [
        Level::Payload,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::DPanic,
        Level::Panic,
        Level::Fatal,
        Level::Disabled,
    ];

    /// Canonical lowercase name, as written by the spec serializer.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Payload => "payload",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::DPanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Disabled => "disabled",
        }
    }
}

/// Strict lookup shared by the lenient and validating entry points.
fn lookup(name: &str) -> Option<Level> {
    let level = match name {
        "PAYLOAD" | "payload" => Level::Payload,
        "DEBUG" | "debug" => Level::Debug,
        "INFO" | "info" | "NOTICE" | "notice" => Level::Info,
        "WARN" | "warn" | "WARNING" | "warning" => Level::Warn,
        "ERROR" | "error" | "CRITICAL" | "critical" => Level::Error,
        "DPANIC" | "dpanic" => Level::DPanic,
        "PANIC" | "panic" => Level::Panic,
        "FATAL" | "fatal" => Level::Fatal,
        "DISABLED" | "disabled" => Level::Disabled,
        _ => return None,
    };
    Some(level)
}

/// Convert a level name to a [`Level`], falling back to [`Level::Info`] for
/// empty or unrecognized names.
///
/// Callers that must reject bad input check [`is_valid_level`] first.
pub fn name_to_level(name: &str) -> Level {
    lookup(name).unwrap_or(Level::Info)
}

/// Whether `name` is a recognized level spelling. Only all-lowercase and
/// all-uppercase spellings are recognized.
pub fn is_valid_level(name: &str) -> bool {
    lookup(name).is_some()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| LevelParseError(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = LevelParseError;

    fn try_from(value: String) -> Result<Self, LevelParseError> {
        value.parse()
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Payload => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error | Level::DPanic | Level::Panic | Level::Fatal => log::LevelFilter::Error,
            Level::Disabled => log::LevelFilter::Off,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Payload,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, LevelParseError, is_valid_level, name_to_level};
    use pretty_assertions::assert_eq;

    #[test]
    fn recognizes_both_cases() {
        assert_eq!(name_to_level("DEBUG"), Level::Debug);
        assert_eq!(name_to_level("debug"), Level::Debug);
        assert_eq!(name_to_level("WARNING"), Level::Warn);
        assert_eq!(name_to_level("critical"), Level::Error);
        assert_eq!(name_to_level("notice"), Level::Info);
    }

    #[test]
    fn lenient_fallback_is_not_validity() {
        assert_eq!(name_to_level(""), Level::Info);
        assert_eq!(name_to_level("Debug"), Level::Info);
        assert_eq!(name_to_level("verbose"), Level::Info);
        assert!(!is_valid_level(""));
        assert!(!is_valid_level("Debug"));
        assert!(!is_valid_level("verbose"));
    }

    #[test]
    fn canonical_names_are_valid() {
        for level in Level::ALL {
            assert!(is_valid_level(level.as_str()), "{level}");
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn ordering_runs_verbose_to_disabled() {
        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Fatal < Level::Disabled);
    }

    #[test]
    fn try_from_string_is_strict() {
        assert_eq!(Level::try_from("WARN".to_string()), Ok(Level::Warn));
        assert_eq!(
            Level::try_from("Warn".to_string()),
            Err(LevelParseError("Warn".to_string()))
        );
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: 'loud'");
    }

    #[test]
    fn maps_to_log_filters() {
        assert_eq!(log::LevelFilter::from(Level::Payload), log::LevelFilter::Trace);
        assert_eq!(log::LevelFilter::from(Level::Panic), log::LevelFilter::Error);
        assert_eq!(log::LevelFilter::from(Level::Disabled), log::LevelFilter::Off);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
    }

    #[test]
    fn serde_uses_names() {
        assert_eq!(serde_json::to_string(&Level::DPanic).unwrap(), "\"dpanic\"");
        let level: Level = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(level, Level::Warn);
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }
}
