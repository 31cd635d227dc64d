use crate::types::scoring::{Thresholds, Tier};

/// Lower bounds are inclusive: a score equal to a cutoff takes the higher tier.
pub fn classify(score: u32, thresholds: &Thresholds) -> Tier {
    let score = f64::from(score);
    if score >= thresholds.hot {
        Tier::Hot
    } else if score >= thresholds.warm {
        Tier::Warm
    } else if score >= thresholds.lukewarm {
        Tier::Lukewarm
    } else {
        Tier::Cold
    }
}
