//! Parsing and rendering of the textual logging spec.
//!
//! The grammar is
//! `[<logger>[,<logger>...]=]<level>[:[<logger>[,<logger>...]=]<level>...]`.
//! A segment without `=` sets the default level. A logger key ending in `.`
//! applies to exactly that logger; a bare key also covers its descendants.

use crate::error::ModuleLevelsError;
use crate::level::{Level, is_valid_level, name_to_level};
use crate::name::is_valid_override_key;
use std::collections::BTreeMap;
use std::fmt;

/// A validated default level plus per-logger overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Level for loggers no override applies to.
    pub default_level: Level,
    /// Override keys, including the trailing `.` of exact-match keys.
    pub overrides: BTreeMap<String, Level>,
}

impl Configuration {
    /// Configuration with no overrides.
    pub fn with_default(default_level: Level) -> Self {
        Self {
            default_level,
            overrides: BTreeMap::new(),
        }
    }

    /// Parse a spec into a new configuration.
    ///
    /// Nothing is committed anywhere; the first bad segment aborts the parse.
    /// A spec without a default segment gets [`Level::Info`] as its default.
    pub fn parse(spec: &str) -> Result<Self, ModuleLevelsError> {
        let mut config = Configuration::default();
        for segment in spec.split(':') {
            let fields: Vec<&str> = segment.split('=').collect();
            match fields.as_slice() {
                [level] => {
                    if !level.is_empty() && !is_valid_level(level) {
                        return Err(ModuleLevelsError::bad_segment(spec, segment));
                    }
                    config.default_level = name_to_level(level);
                }
                [loggers, level] => {
                    if loggers.is_empty() {
                        return Err(ModuleLevelsError::no_logger(spec, segment));
                    }
                    if !level.is_empty() && !is_valid_level(level) {
                        return Err(ModuleLevelsError::bad_segment(spec, segment));
                    }
                    let level = name_to_level(level);
                    for logger in loggers.split(',') {
                        if !is_valid_override_key(logger) {
                            return Err(ModuleLevelsError::bad_logger_name(spec, logger));
                        }
                        config.overrides.insert(logger.to_string(), level);
                    }
                }
                _ => return Err(ModuleLevelsError::bad_segment(spec, segment)),
            }
        }
        Ok(config)
    }
}

/// Renders the canonical spec: overrides sorted by key, then the default.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (logger, level) in &self.overrides {
            write!(f, "{logger}={level}:")?;
        }
        write!(f, "{}", self.default_level)
    }
}
