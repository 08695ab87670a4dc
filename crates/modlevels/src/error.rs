//! Error types for spec activation and level parsing.

use thiserror::Error;

/// Errors returned while activating a logging spec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModuleLevelsError {
    /// A segment of the spec failed validation. The active configuration is
    /// left untouched.
    #[error("invalid logging specification '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },
}

impl ModuleLevelsError {
    pub(crate) fn bad_segment(spec: &str, segment: &str) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: format!("bad segment '{segment}'"),
        }
    }

    pub(crate) fn no_logger(spec: &str, segment: &str) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: format!("no logger specified in segment '{segment}'"),
        }
    }

    pub(crate) fn bad_logger_name(spec: &str, logger: &str) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: format!("bad logger name '{logger}'"),
        }
    }
}

/// Returned by [`Level::from_str`](crate::Level) for names that are not a
/// recognized level spelling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid log level: '{0}'")]
pub struct LevelParseError(pub String);
