use super::SettingsStore;
use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, Value>,
}

impl MemorySettingsStore {
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn fetch(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }
}
