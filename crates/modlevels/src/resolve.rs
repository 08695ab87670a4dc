//! Hierarchy walk from a logger name toward the root.

use crate::level::Level;
use crate::spec::Configuration;

impl Configuration {
    /// Effective level for `logger_name` under this configuration.
    ///
    /// The exact-match key (`name.`) is checked first and only for the name
    /// itself. After that the bare name and each ancestor prefix are checked,
    /// longest first, falling back to the default level.
    pub fn resolve(&self, logger_name: &str) -> Level {
        let mut exact = String::with_capacity(logger_name.len() + 1);
        exact.push_str(logger_name);
        exact.push('.');
        if let Some(level) = self.overrides.get(&exact) {
            return *level;
        }

        let mut candidate = logger_name;
        loop {
            if let Some(level) = self.overrides.get(candidate) {
                return *level;
            }
            match candidate.rfind('.') {
                Some(idx) if idx > 0 => candidate = &candidate[..idx],
                _ => return self.default_level,
            }
        }
    }
}
