use crate::types::report::BatchReport;

pub fn to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
