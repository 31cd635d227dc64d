use super::headers::field_for_header;
use crate::types::lead::LeadRecord;
use serde_json::{Map, Value};
use std::io::Read;

/// Parses an array of lead objects. Nulls are dropped, scalars stringified.
/// Keys are visited in document order, so when two keys feed the same field
/// the first non-empty one wins, as with CSV columns.
pub fn parse_leads<R: Read>(reader: R) -> Result<Vec<LeadRecord>, serde_json::Error> {
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;
    Ok(rows
        .into_iter()
        .map(to_lead)
        .filter(|lead| !lead.is_empty())
        .collect())
}

fn to_lead(row: Map<String, Value>) -> LeadRecord {
    let mut cells = row
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(text) => text.trim().to_string(),
                other => other.to_string(),
            };
            (!text.is_empty()).then(|| (field_for_header(&key), text))
        })
        .collect::<Vec<_>>();
    cells.reverse();
    cells.into_iter().collect()
}
