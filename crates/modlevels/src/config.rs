//! Settings for building a [`ModuleLevels`](crate::ModuleLevels) engine.

use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Initial level settings, typically embedded in a larger service config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleLevelsConfig {
    /// Default level before any spec is activated.
    #[serde(default)]
    pub default_level: Level,
    /// Spec activated when the engine is built.
    #[serde(default)]
    pub spec: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ModuleLevelsConfig;
    use crate::level::Level;
    use crate::levels::ModuleLevels;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_minimal_config() {
        let config: ModuleLevelsConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(config, ModuleLevelsConfig::default());
        assert_eq!(config.default_level, Level::Info);
    }

    #[test]
    fn rejects_unknown_key() {
        let err = serde_json::from_str::<ModuleLevelsConfig>(r#"{ "levle": "debug" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn builds_with_default_only() {
        let config: ModuleLevelsConfig =
            serde_json::from_str(r#"{ "default_level": "ERROR" }"#).expect("config");
        let levels = ModuleLevels::from_config(&config).expect("levels");
        assert_eq!(levels.default_level(), Level::Error);
        assert_eq!(levels.level("a.b"), Level::Error);
    }

    #[test]
    fn builds_with_spec() {
        let config: ModuleLevelsConfig = serde_json::from_str(
            r#"{ "default_level": "error", "spec": "gossip=debug:warn" }"#,
        )
        .expect("config");
        let levels = ModuleLevels::from_config(&config).expect("levels");
        assert_eq!(levels.level("gossip.state"), Level::Debug);
        assert_eq!(levels.default_level(), Level::Warn);
    }

    #[test]
    fn bad_spec_fails_build() {
        let config = ModuleLevelsConfig {
            default_level: Level::Info,
            spec: Some("a..b=debug".to_string()),
        };
        assert!(ModuleLevels::from_config(&config).is_err());
    }
}
