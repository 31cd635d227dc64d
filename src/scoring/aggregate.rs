use crate::types::scoring::{Dimension, QuestionScores, ScoringConfig, SubScore};

/// Weighted share of a sub-score; weights read as percentages of 0-100.
pub fn contribution(score: SubScore, weight: f64) -> f64 {
    f64::from(score) * weight / 100.0
}

/// Weighted composite, rounded half up. Weights are not normalized.
pub fn composite_score(scores: &QuestionScores, config: &ScoringConfig) -> u32 {
    let total: f64 = Dimension::ALL
        .into_iter()
        .map(|dimension| contribution(scores.get(dimension), config.weight(dimension)))
        .sum();
    total.round().max(0.0) as u32
}
