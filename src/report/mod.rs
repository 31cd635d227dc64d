pub mod export;
pub mod json;
pub mod md;

use crate::batch::ScoringRun;
use crate::error::{LeadScoreError, Result};
use crate::types::report::BatchReport;
use crate::types::scoring::ScoringConfig;
use chrono::Utc;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LeadScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

/// Snapshot of a scoring run, stamped with the time and the exact
/// configuration that produced it.
pub fn build_report(run: ScoringRun) -> Result<BatchReport> {
    let config_fingerprint = config_fingerprint(&run.loaded.config)?;
    let distribution = run.summary.distribution();
    let surveyed_leads = run.summary.surveyed_leads();

    Ok(BatchReport {
        generated_at: Utc::now().to_rfc3339(),
        config_source: run.loaded.source,
        config_fingerprint,
        total_leads: run.summary.total_leads,
        surveyed_leads,
        distribution,
        average_score: run.summary.average_score,
        hot_lead_percentage: run.summary.hot_lead_percentage,
        breakdowns: run.summary.breakdowns,
        leads: run.summary.scored,
    })
}

/// SHA-256 of the configuration's canonical JSON form.
pub fn config_fingerprint(config: &ScoringConfig) -> Result<String> {
    let bytes = serde_json::to_vec(config)?;
    Ok(sha256_hex(&bytes))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchScorer;
    use crate::store::MemorySettingsStore;
    use crate::types::lead::LeadRecord;
    use crate::types::report::ConfigSource;
    use crate::types::scoring::Dimension;

    #[test]
    fn output_format_names() {
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name(" MD "), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_name("markdown"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_name("sarif"), None);
    }

    #[test]
    fn fingerprint_tracks_config_changes() {
        let builtin = config_fingerprint(&ScoringConfig::builtin()).expect("fingerprint");
        let again = config_fingerprint(&ScoringConfig::builtin()).expect("fingerprint");
        let tweaked = config_fingerprint(
            &ScoringConfig::builtin().with_weight(Dimension::Gender, 5.0),
        )
        .expect("fingerprint");

        assert_eq!(builtin, again);
        assert_ne!(builtin, tweaked);
        assert_eq!(builtin.len(), 64);
    }

    #[test]
    fn build_report_carries_summary() {
        let store = MemorySettingsStore::default();
        let leads = vec![
            LeadRecord::new().with("gender", "F"),
            LeadRecord::new().with("name", "no survey"),
        ];
        let run = BatchScorer::new(&store).run(&leads, &[]);
        let report = build_report(run).expect("report should build");

        assert_eq!(report.config_source, ConfigSource::Default);
        assert_eq!(report.total_leads, 2);
        assert_eq!(report.surveyed_leads, 1);
        assert_eq!(report.leads.len(), 1);
        assert_eq!(report.distribution.len(), 4);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }
}
