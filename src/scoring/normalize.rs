use crate::types::lead::LeadRecord;

/// Lower-cased answer for `field`; absent and blank values both become "".
pub fn normalized_answer(lead: &LeadRecord, field: &str) -> String {
    lead.get(field)
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default()
}
