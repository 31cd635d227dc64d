pub mod breakdown;

pub use breakdown::{breakdown, BreakdownField};

use crate::scoring::ScoringEngine;
use crate::store::{load_scoring_config, LoadedConfig, SettingsStore};
use crate::types::lead::{LeadRecord, ScoredLead};
use crate::types::report::{Breakdown, TierCounts, TierSlice};
use crate::types::scoring::{ScoringConfig, Tier};

/// Aggregates over the surveyed subset of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_leads: usize,
    pub scored: Vec<ScoredLead>,
    pub counts: TierCounts,
    pub average_score: u32,
    pub hot_lead_percentage: u32,
    pub breakdowns: Vec<Breakdown>,
}

impl BatchSummary {
    pub fn surveyed_leads(&self) -> usize {
        self.scored.len()
    }

    pub fn distribution(&self) -> Vec<TierSlice> {
        Tier::ordered()
            .into_iter()
            .map(|tier| TierSlice {
                name: tier.label(),
                value: self.counts.get(tier),
                color: tier.color(),
            })
            .collect()
    }
}

/// Scores every surveyed lead and aggregates the results. Leads without a
/// survey answer are counted in `total_leads` only.
pub fn score_batch(
    leads: &[LeadRecord],
    config: &ScoringConfig,
    breakdown_fields: &[BreakdownField],
) -> BatchSummary {
    let engine = ScoringEngine::new(config);

    let scored = leads
        .iter()
        .filter(|lead| lead.is_surveyed())
        .map(|lead| {
            let result = engine.score(lead);
            ScoredLead {
                lead: lead.clone(),
                calculated_score: result.composite,
                score_category: result.tier,
            }
        })
        .collect::<Vec<_>>();

    let (counts, score_sum) = scored.iter().fold(
        (TierCounts::default(), 0u64),
        |(mut counts, sum), lead| {
            counts.record(lead.score_category);
            (counts, sum + u64::from(lead.calculated_score))
        },
    );

    let surveyed = scored.len();
    let (average_score, hot_lead_percentage) = if surveyed == 0 {
        (0, 0)
    } else {
        (
            (score_sum as f64 / surveyed as f64).round() as u32,
            (counts.hot as f64 / surveyed as f64 * 100.0).round() as u32,
        )
    };

    let breakdowns = breakdown_fields
        .iter()
        .map(|field| breakdown(&scored, *field))
        .collect();

    tracing::info!(
        total = leads.len(),
        surveyed,
        hot = counts.hot,
        warm = counts.warm,
        lukewarm = counts.lukewarm,
        cold = counts.cold,
        average_score,
        "scored lead batch"
    );

    BatchSummary {
        total_leads: leads.len(),
        scored,
        counts,
        average_score,
        hot_lead_percentage,
        breakdowns,
    }
}

/// Result of one scoring invocation against a settings store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRun {
    pub loaded: LoadedConfig,
    pub summary: BatchSummary,
}

/// Loads the configuration once, then scores the batch with it.
pub struct BatchScorer<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> BatchScorer<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    pub fn run(&self, leads: &[LeadRecord], breakdown_fields: &[BreakdownField]) -> ScoringRun {
        let loaded = load_scoring_config(self.store);
        tracing::debug!(source = ?loaded.source, leads = leads.len(), "starting scoring run");
        let summary = score_batch(leads, &loaded.config, breakdown_fields);
        ScoringRun { loaded, summary }
    }
}
