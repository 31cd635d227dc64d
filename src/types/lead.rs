use super::scoring::{Dimension, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Non-scored metadata columns carried by a lead.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const TIMESTAMP: &str = "timestamp";
    pub const UTM_SOURCE: &str = "utmSource";
    pub const UTM_MEDIUM: &str = "utmMedium";
    pub const UTM_CAMPAIGN: &str = "utmCampaign";
    pub const UTM_CONTENT: &str = "utmContent";
    pub const UTM_TERM: &str = "utmTerm";
}

/// One survey respondent: field name to the raw text they entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadRecord {
    fields: BTreeMap<String, String>,
}

impl LeadRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Survey completion is proxied by the gender answer being present.
    pub fn is_surveyed(&self) -> bool {
        self.get(Dimension::Gender.field())
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}

impl FromIterator<(String, String)> for LeadRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A surveyed lead with its classification attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub lead: LeadRecord,
    #[serde(rename = "calculatedScore")]
    pub calculated_score: u32,
    #[serde(rename = "scoreCategory")]
    pub score_category: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surveyed_requires_non_blank_gender() {
        assert!(!LeadRecord::new().is_surveyed());
        assert!(!LeadRecord::new().with("gender", "   ").is_surveyed());
        assert!(!LeadRecord::new()
            .with("creditLimit", "Acima de R$ 50.000")
            .is_surveyed());
        assert!(LeadRecord::new().with("gender", "Feminino").is_surveyed());
    }

    #[test]
    fn scored_lead_serializes_flat_with_result_fields() {
        let scored = ScoredLead {
            lead: LeadRecord::new().with("name", "Ana").with("gender", "F"),
            calculated_score: 47,
            score_category: Tier::Lukewarm,
        };
        let value = serde_json::to_value(&scored).expect("scored lead should serialize");
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["calculatedScore"], 47);
        assert_eq!(value["scoreCategory"], "C - Lukewarm");
    }
}
