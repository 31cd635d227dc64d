use super::SettingsStore;
use crate::error::{LeadScoreError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Settings exported to a JSON file, read fresh on every fetch.
///
/// Accepts either an object keyed by setting name or an array of
/// `{"key": ..., "value": ...}` rows.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SettingsDocument {
    Rows(Vec<SettingsRow>),
    Keyed(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct SettingsRow {
    key: String,
    #[serde(default)]
    value: Value,
}

impl SettingsStore for FileSettingsStore {
    fn fetch(&self, key: &str) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Err(LeadScoreError::PathNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let document: SettingsDocument = serde_json::from_str(&content)?;

        let value = match document {
            SettingsDocument::Rows(rows) => rows
                .into_iter()
                .find(|row| row.key == key)
                .map(|row| row.value),
            SettingsDocument::Keyed(mut map) => map.remove(key),
        };
        Ok(value.filter(|value| !value.is_null()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_keyed_document() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"lead_scoring_config": {"a": 1}, "theme": "dark"}"#)
            .expect("settings should write");

        let store = FileSettingsStore::new(&path);
        let value = store
            .fetch("lead_scoring_config")
            .expect("fetch should succeed");
        assert_eq!(value, Some(serde_json::json!({"a": 1})));
        assert_eq!(store.fetch("missing").expect("fetch should succeed"), None);
    }

    #[test]
    fn reads_row_document() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"[{"key": "theme", "value": "dark"}, {"key": "lead_scoring_config", "value": {"b": 2}}]"#,
        )
        .expect("settings should write");

        let value = FileSettingsStore::new(&path)
            .fetch("lead_scoring_config")
            .expect("fetch should succeed");
        assert_eq!(value, Some(serde_json::json!({"b": 2})));
    }

    #[test]
    fn null_value_counts_as_absent() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"lead_scoring_config": null}"#).expect("settings should write");

        let value = FileSettingsStore::new(&path)
            .fetch("lead_scoring_config")
            .expect("fetch should succeed");
        assert!(value.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = FileSettingsStore::new(dir.path().join("nope.json"));
        assert!(matches!(
            store.fetch("lead_scoring_config"),
            Err(LeadScoreError::PathNotFound(_))
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").expect("settings should write");
        assert!(matches!(
            FileSettingsStore::new(&path).fetch("lead_scoring_config"),
            Err(LeadScoreError::Json(_))
        ));
    }
}
