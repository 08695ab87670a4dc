//! The level engine shared by every logger in a process.

use crate::cache::ResolutionCache;
use crate::config::ModuleLevelsConfig;
use crate::error::ModuleLevelsError;
use crate::level::Level;
use crate::spec::Configuration;
use log::{debug, info, warn};
use parking_lot::RwLock;

/// Active configuration and the cache derived from it. Both live under one
/// lock so readers never pair a new configuration with stale cache entries.
#[derive(Debug, Default)]
struct LevelState {
    config: Configuration,
    cache: ResolutionCache,
}

/// Tracks the effective level of hierarchical loggers.
///
/// Lookups through [`ModuleLevels::level`] are memoized; a cache hit only
/// takes the shared read lock. [`ModuleLevels::activate_spec`] replaces the
/// whole configuration and clears the cache in one exclusive section.
#[derive(Debug, Default)]
pub struct ModuleLevels {
    state: RwLock<LevelState>,
}

impl ModuleLevels {
    /// Create an engine with no overrides.
    pub fn new(default_level: Level) -> Self {
        Self {
            state: RwLock::new(LevelState {
                config: Configuration::with_default(default_level),
                cache: ResolutionCache::default(),
            }),
        }
    }

    /// Build an engine from settings, activating the configured spec if any.
    pub fn from_config(config: &ModuleLevelsConfig) -> Result<Self, ModuleLevelsError> {
        let levels = Self::new(config.default_level);
        if let Some(spec) = config.spec.as_deref() {
            levels.activate_spec(spec)?;
        }
        Ok(levels)
    }

    /// Level used by loggers no override applies to.
    pub fn default_level(&self) -> Level {
        self.state.read().config.default_level
    }

    /// Replace the active configuration with one parsed from `spec`.
    ///
    /// The spec has the form
    /// `[<logger>[,<logger>...]=]<level>[:[<logger>[,<logger>...]=]<level>...]`.
    /// On error the previous configuration stays in force.
    pub fn activate_spec(&self, spec: &str) -> Result<(), ModuleLevelsError> {
        let mut state = self.state.write();
        let config = match Configuration::parse(spec) {
            Ok(config) => config,
            Err(err) => {
                drop(state);
                warn!("rejected logging spec: {err}");
                return Err(err);
            }
        };
        let overrides = config.overrides.len();
        let canonical = config.to_string();
        state.config = config;
        state.cache.clear_all();
        drop(state);

        info!("activated logging spec (spec={canonical}, overrides={overrides})");
        Ok(())
    }

    /// Effective level for `logger_name`.
    pub fn level(&self, logger_name: &str) -> Level {
        if let Some(level) = self.state.read().cache.get(logger_name) {
            return level;
        }

        let mut state = self.state.write();
        let level = state.config.resolve(logger_name);
        state.cache.put(logger_name, level);
        drop(state);

        debug!("resolved logger level (logger={logger_name}, level={level})");
        level
    }

    /// Whether a record at `level` from `logger_name` passes the threshold.
    pub fn enabled(&self, logger_name: &str, level: Level) -> bool {
        level != Level::Disabled && level >= self.level(logger_name)
    }

    /// Canonical form of the active spec.
    pub fn spec(&self) -> String {
        self.state.read().config.to_string()
    }

    /// Snapshot of the active configuration.
    pub fn configuration(&self) -> Configuration {
        self.state.read().config.clone()
    }

    /// Number of memoized logger names.
    pub fn cached_len(&self) -> usize {
        self.state.read().cache.len()
    }
}
