use crate::batch::BreakdownField;
use crate::error::LeadScoreError;
use crate::report::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Application settings read from `leadscore.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    pub settings_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub breakdowns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.report
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
            .unwrap_or(OutputFormat::Md)
    }

    pub fn breakdown_fields(&self) -> Vec<BreakdownField> {
        match &self.report.breakdowns {
            Some(names) => names
                .iter()
                .filter_map(|name| BreakdownField::from_name(name))
                .collect(),
            None => BreakdownField::defaults().to_vec(),
        }
    }

    pub fn validate(&self) -> Result<(), LeadScoreError> {
        if let Some(format) = &self.report.format {
            if OutputFormat::from_name(format).is_none() {
                return Err(LeadScoreError::ConfigParse(format!(
                    "report.format must be \"json\" or \"md\" (found \"{format}\")"
                )));
            }
        }

        if let Some(names) = &self.report.breakdowns {
            let unknown = names
                .iter()
                .filter(|name| BreakdownField::from_name(name).is_none())
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(LeadScoreError::ConfigParse(format!(
                    "report.breakdowns contains unknown field(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        if let Some(settings_file) = &self.store.settings_file {
            if settings_file.as_os_str().is_empty() {
                return Err(LeadScoreError::ConfigParse(
                    "store.settings_file cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
