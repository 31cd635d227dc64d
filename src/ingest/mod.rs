pub mod csv;
pub mod headers;
pub mod json;

use crate::error::{LeadScoreError, Result};
use crate::types::lead::LeadRecord;
use std::fs::File;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormat {
    Csv,
    Json,
}

impl LeadFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Reads leads from a CSV/JSON file, or from every such file under a
/// directory in path order.
pub fn load_leads(path: &Path) -> Result<Vec<LeadRecord>> {
    if !path.exists() {
        return Err(LeadScoreError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return load_file(path, LeadFormat::from_path(path).unwrap_or(LeadFormat::Csv));
    }

    let mut leads = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        if let Some(format) = LeadFormat::from_path(entry.path()) {
            leads.extend(load_file(entry.path(), format)?);
        }
    }
    Ok(leads)
}

fn load_file(path: &Path, format: LeadFormat) -> Result<Vec<LeadRecord>> {
    let file = File::open(path)?;
    let leads = match format {
        LeadFormat::Csv => csv::parse_leads(file)?,
        LeadFormat::Json => json::parse_leads(file)?,
    };
    tracing::debug!(path = %path.display(), count = leads.len(), "loaded leads");
    Ok(leads)
}
