pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod rules;

use crate::types::lead::LeadRecord;
use crate::types::scoring::{Dimension, QuestionScores, ScoringConfig, SubScore, Tier};
use serde::Serialize;

/// Applies one scoring configuration to individual leads.
pub struct ScoringEngine<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        self.config
    }

    pub fn score(&self, lead: &LeadRecord) -> LeadScore {
        let mut question_scores = QuestionScores::default();
        let mut components = Vec::with_capacity(Dimension::ALL.len());

        for dimension in Dimension::ALL {
            let answer = normalize::normalized_answer(lead, dimension.field());
            let score = rules::score_answer(dimension, &answer);
            let weight = self.config.weight(dimension);
            question_scores.set(dimension, score);
            components.push(ScoreComponent {
                dimension,
                answer,
                score,
                weight,
                contribution: aggregate::contribution(score, weight),
            });
        }

        let composite = aggregate::composite_score(&question_scores, self.config);
        let tier = classify::classify(composite, self.config.thresholds());

        LeadScore {
            question_scores,
            components,
            composite,
            tier,
        }
    }
}

/// Contribution of one question to a lead's composite, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub dimension: Dimension,
    pub answer: String,
    pub score: SubScore,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadScore {
    pub question_scores: QuestionScores,
    pub components: Vec<ScoreComponent>,
    pub composite: u32,
    pub tier: Tier,
}
