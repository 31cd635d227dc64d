//! Persisted settings and the scoring configuration read from them.

pub mod file;
pub mod memory;

use crate::error::Result;
use crate::types::report::ConfigSource;
use crate::types::scoring::ScoringConfig;
use serde_json::Value;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;

/// Settings key the scoring configuration is stored under.
pub const SCORING_CONFIG_KEY: &str = "lead_scoring_config";

/// Key-value settings backend.
pub trait SettingsStore {
    /// `Ok(None)` when the key is not present.
    fn fetch(&self, key: &str) -> Result<Option<Value>>;
}

/// Configuration in effect for one batch and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ScoringConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    fn fallback() -> Self {
        Self {
            config: ScoringConfig::builtin(),
            source: ConfigSource::Default,
        }
    }
}

/// Reads the scoring configuration once. Never fails: missing, unreadable
/// or malformed settings all resolve to the built-in configuration.
pub fn load_scoring_config(store: &dyn SettingsStore) -> LoadedConfig {
    let value = match store.fetch(SCORING_CONFIG_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(key = SCORING_CONFIG_KEY, "no stored scoring config, using default");
            return LoadedConfig::fallback();
        }
        Err(err) => {
            tracing::warn!(key = SCORING_CONFIG_KEY, error = %err, "scoring config unavailable, using default");
            return LoadedConfig::fallback();
        }
    };

    match parse_scoring_config(value) {
        Ok(config) => {
            for warning in config.warnings() {
                tracing::warn!("scoring config: {warning}");
            }
            tracing::debug!(weight_sum = config.weight_sum(), "loaded stored scoring config");
            LoadedConfig {
                config,
                source: ConfigSource::Store,
            }
        }
        Err(err) => {
            tracing::warn!(key = SCORING_CONFIG_KEY, error = %err, "malformed scoring config, using default");
            LoadedConfig::fallback()
        }
    }
}

// Settings tables often keep JSON as text.
fn parse_scoring_config(value: Value) -> std::result::Result<ScoringConfig, serde_json::Error> {
    match value {
        Value::String(text) => serde_json::from_str(&text),
        other => serde_json::from_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeadScoreError;
    use crate::types::scoring::Dimension;
    use serde_json::json;

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn fetch(&self, _key: &str) -> Result<Option<Value>> {
            Err(LeadScoreError::InvalidInput("connection refused".to_string()))
        }
    }

    fn stored_config() -> Value {
        json!({
            "questions": {
                "creditLimit": {"weight": 50, "label": "Crédito"},
                "income": {"weight": 50, "label": "Renda"}
            },
            "thresholds": {"hot": 70, "warm": 50, "lukewarm": 30, "cold": 0}
        })
    }

    #[test]
    fn absent_key_falls_back_to_default() {
        let loaded = load_scoring_config(&MemorySettingsStore::default());
        assert_eq!(loaded.source, ConfigSource::Default);
        assert_eq!(loaded.config, ScoringConfig::builtin());
    }

    #[test]
    fn store_error_falls_back_to_default() {
        let loaded = load_scoring_config(&FailingStore);
        assert_eq!(loaded.source, ConfigSource::Default);
        assert_eq!(loaded.config, ScoringConfig::builtin());
    }

    #[test]
    fn malformed_shape_falls_back_to_default() {
        let store = MemorySettingsStore::default()
            .with(SCORING_CONFIG_KEY, json!({"creditLimit": 20, "income": 15}));
        let loaded = load_scoring_config(&store);
        assert_eq!(loaded.source, ConfigSource::Default);
        assert_eq!(loaded.config, ScoringConfig::builtin());
    }

    #[test]
    fn stored_object_is_used() {
        let store = MemorySettingsStore::default().with(SCORING_CONFIG_KEY, stored_config());
        let loaded = load_scoring_config(&store);
        assert_eq!(loaded.source, ConfigSource::Store);
        assert_eq!(loaded.config.weight(Dimension::CreditLimit), 50.0);
        assert_eq!(loaded.config.thresholds().hot, 70.0);
    }

    #[test]
    fn stored_json_text_is_parsed() {
        let text = stored_config().to_string();
        let store = MemorySettingsStore::default().with(SCORING_CONFIG_KEY, Value::String(text));
        let loaded = load_scoring_config(&store);
        assert_eq!(loaded.source, ConfigSource::Store);
        assert_eq!(loaded.config.weight(Dimension::Income), 50.0);
    }
}
