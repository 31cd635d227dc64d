use crate::types::lead::{fields, ScoredLead};
use crate::types::report::{Breakdown, BreakdownRow, TierCounts};
use crate::types::scoring::Dimension;
use std::collections::BTreeMap;

/// Group label for leads that left the grouping field empty.
pub const UNSPECIFIED_GROUP: &str = "Não informado";

/// Categorical lead fields a breakdown can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownField {
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmContent,
    UtmTerm,
    SocialNetwork,
    Region,
}

impl BreakdownField {
    pub const ALL: [BreakdownField; 7] = [
        BreakdownField::UtmSource,
        BreakdownField::UtmMedium,
        BreakdownField::UtmCampaign,
        BreakdownField::UtmContent,
        BreakdownField::UtmTerm,
        BreakdownField::SocialNetwork,
        BreakdownField::Region,
    ];

    pub fn defaults() -> [BreakdownField; 2] {
        [BreakdownField::UtmMedium, BreakdownField::UtmContent]
    }

    pub fn field(self) -> &'static str {
        match self {
            BreakdownField::UtmSource => fields::UTM_SOURCE,
            BreakdownField::UtmMedium => fields::UTM_MEDIUM,
            BreakdownField::UtmCampaign => fields::UTM_CAMPAIGN,
            BreakdownField::UtmContent => fields::UTM_CONTENT,
            BreakdownField::UtmTerm => fields::UTM_TERM,
            BreakdownField::SocialNetwork => Dimension::SocialNetwork.field(),
            BreakdownField::Region => Dimension::Region.field(),
        }
    }

    /// Accepts `utmMedium`, `utm_medium` and `utm-medium` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = squash(name);
        Self::ALL
            .into_iter()
            .find(|candidate| squash(candidate.field()) == wanted)
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tier counts per distinct value of `field`, largest groups first.
pub fn breakdown(leads: &[ScoredLead], field: BreakdownField) -> Breakdown {
    let mut groups: BTreeMap<String, TierCounts> = BTreeMap::new();
    for scored in leads {
        let key = scored
            .lead
            .get(field.field())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(UNSPECIFIED_GROUP);
        groups
            .entry(key.to_string())
            .or_default()
            .record(scored.score_category);
    }

    let mut rows = groups
        .into_iter()
        .map(|(name, counts)| BreakdownRow::new(name, &counts))
        .collect::<Vec<_>>();
    // stable sort keeps the name order from the BTreeMap for equal totals
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    Breakdown {
        field: field.field().to_string(),
        rows,
    }
}
