//! Demo Configuration
//!
//! Read from the bundled `demo.json`; falls back to defaults when it does not parse.

use serde::Deserialize;

use crate::models::Entry;

const BUNDLED: &str = include_str!("../demo.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub entries: Vec<Entry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            entries: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn load() -> Self {
        Self::parse(BUNDLED).unwrap_or_default()
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = DemoConfig::parse(BUNDLED).unwrap();
        assert_eq!(config.entries.len(), 3);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = DemoConfig::parse("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = DemoConfig::parse(r#"{ "logLevel": "loud" }"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
