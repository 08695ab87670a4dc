//! Memoized resolutions keyed by logger name.

use crate::level::Level;
use std::collections::HashMap;

/// Resolved levels for names looked up since the last activation.
///
/// Holds no authority of its own: every entry must equal what the active
/// configuration resolves to. Locking is left to the owner.
#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
    levels: HashMap<String, Level>,
}

impl ResolutionCache {
    pub(crate) fn get(&self, logger_name: &str) -> Option<Level> {
        self.levels.get(logger_name).copied()
    }

    pub(crate) fn put(&mut self, logger_name: &str, level: Level) {
        self.levels.insert(logger_name.to_string(), level);
    }

    /// Drop every entry. Only called while swapping in a new configuration.
    pub(crate) fn clear_all(&mut self) {
        self.levels.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ResolutionCache;
    use crate::level::Level;
    use pretty_assertions::assert_eq;

    #[test]
    fn put_get_clear() {
        let mut cache = ResolutionCache::default();
        assert_eq!(cache.get("a"), None);
        cache.put("a", Level::Debug);
        cache.put("a", Level::Warn);
        cache.put("b", Level::Info);
        assert_eq!(cache.get("a"), Some(Level::Warn));
        assert_eq!(cache.len(), 2);
        cache.clear_all();
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 0);
    }
}
