use super::lead::ScoredLead;
use super::scoring::Tier;
use serde::Serialize;

/// Per-tier tally. Tallies from independent partitions combine with `merge`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub hot: usize,
    pub warm: usize,
    pub lukewarm: usize,
    pub cold: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: Tier) {
        match tier {
            Tier::Hot => self.hot += 1,
            Tier::Warm => self.warm += 1,
            Tier::Lukewarm => self.lukewarm += 1,
            Tier::Cold => self.cold += 1,
        }
    }

    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Hot => self.hot,
            Tier::Warm => self.warm,
            Tier::Lukewarm => self.lukewarm,
            Tier::Cold => self.cold,
        }
    }

    pub fn total(&self) -> usize {
        self.hot + self.warm + self.lukewarm + self.cold
    }

    pub fn merge(mut self, other: TierCounts) -> TierCounts {
        self.hot += other.hot;
        self.warm += other.warm;
        self.lukewarm += other.lukewarm;
        self.cold += other.cold;
        self
    }
}

/// One slice of the tier distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSlice {
    pub name: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// Tier counts for one group of an attribution breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub name: String,
    pub total: usize,
    pub alto: usize,
    pub medio: usize,
    pub baixo: usize,
    pub desqualificado: usize,
}

impl BreakdownRow {
    pub fn new(name: String, counts: &TierCounts) -> Self {
        Self {
            name,
            total: counts.total(),
            alto: counts.hot,
            medio: counts.warm,
            baixo: counts.lukewarm,
            desqualificado: counts.cold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub field: String,
    pub rows: Vec<BreakdownRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    Store,
    Default,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: String,
    pub config_source: ConfigSource,
    pub config_fingerprint: String,
    pub total_leads: usize,
    pub surveyed_leads: usize,
    pub distribution: Vec<TierSlice>,
    pub average_score: u32,
    pub hot_lead_percentage: u32,
    pub breakdowns: Vec<Breakdown>,
    pub leads: Vec<ScoredLead>,
}
