use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub type SubScore = u8;

/// The eleven survey questions that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    CreditLimit,
    Income,
    Experience,
    FollowTime,
    SocialNetwork,
    Age,
    Profession,
    Objection,
    Region,
    MaritalStatus,
    Gender,
}

impl Dimension {
    pub const ALL: [Dimension; 11] = [
        Dimension::CreditLimit,
        Dimension::Income,
        Dimension::Experience,
        Dimension::FollowTime,
        Dimension::SocialNetwork,
        Dimension::Age,
        Dimension::Profession,
        Dimension::Objection,
        Dimension::Region,
        Dimension::MaritalStatus,
        Dimension::Gender,
    ];

    /// Lead field holding the answer for this question.
    pub fn field(self) -> &'static str {
        match self {
            Dimension::CreditLimit => "creditLimit",
            Dimension::Income => "income",
            Dimension::Experience => "experience",
            Dimension::FollowTime => "followTime",
            Dimension::SocialNetwork => "socialNetwork",
            Dimension::Age => "age",
            Dimension::Profession => "profession",
            Dimension::Objection => "objection",
            Dimension::Region => "region",
            Dimension::MaritalStatus => "maritalStatus",
            Dimension::Gender => "gender",
        }
    }

    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.field() == name)
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Dimension::CreditLimit => "Limite de Crédito",
            Dimension::Income => "Renda Mensal",
            Dimension::Experience => "Experiência com Investimentos",
            Dimension::FollowTime => "Tempo que Acompanha",
            Dimension::SocialNetwork => "Rede Social",
            Dimension::Age => "Faixa Etária",
            Dimension::Profession => "Profissão",
            Dimension::Objection => "Objeção",
            Dimension::Region => "Região",
            Dimension::MaritalStatus => "Estado Civil",
            Dimension::Gender => "Gênero",
        }
    }

    fn default_weight(self) -> f64 {
        match self {
            Dimension::CreditLimit => 20.0,
            Dimension::Income => 15.0,
            Dimension::Experience => 15.0,
            Dimension::FollowTime => 10.0,
            Dimension::SocialNetwork => 5.0,
            Dimension::Age => 10.0,
            Dimension::Profession => 10.0,
            Dimension::Objection => 5.0,
            Dimension::Region => 5.0,
            Dimension::MaritalStatus => 5.0,
            Dimension::Gender => 0.0,
        }
    }
}

/// Qualification tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "A - Hot Lead")]
    Hot,
    #[serde(rename = "B - Warm")]
    Warm,
    #[serde(rename = "C - Lukewarm")]
    Lukewarm,
    #[serde(rename = "D - Cold")]
    Cold,
}

impl Tier {
    pub fn ordered() -> [Tier; 4] {
        [Tier::Hot, Tier::Warm, Tier::Lukewarm, Tier::Cold]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Hot => "A - Hot Lead",
            Tier::Warm => "B - Warm",
            Tier::Lukewarm => "C - Lukewarm",
            Tier::Cold => "D - Cold",
        }
    }

    /// Chart color handed through to the dashboard.
    pub fn color(self) -> &'static str {
        match self {
            Tier::Hot => "#22c55e",
            Tier::Warm => "#eab308",
            Tier::Lukewarm => "#f97316",
            Tier::Cold => "#ef4444",
        }
    }
}

/// Weight entry for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionWeight {
    pub weight: f64,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub hot: f64,
    pub warm: f64,
    pub lukewarm: f64,
    pub cold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hot: 80.0,
            warm: 60.0,
            lukewarm: 40.0,
            cold: 0.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigShapeError {
    #[error("questions.{0}.weight must be a finite, non-negative number")]
    InvalidWeight(String),

    #[error("thresholds.{0} must be a finite number")]
    InvalidThreshold(&'static str),
}

/// Weights and tier cutoffs applied to one scoring batch.
///
/// Every dimension is always present; a configuration that omits a question
/// gives it weight 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoringConfig")]
pub struct ScoringConfig {
    questions: BTreeMap<Dimension, QuestionWeight>,
    thresholds: Thresholds,
}

impl ScoringConfig {
    pub fn builtin() -> Self {
        let questions = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                (
                    dimension,
                    QuestionWeight {
                        weight: dimension.default_weight(),
                        label: dimension.default_label().to_string(),
                        description: String::new(),
                    },
                )
            })
            .collect();

        Self {
            questions,
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_weight(mut self, dimension: Dimension, weight: f64) -> Self {
        if let Some(entry) = self.questions.get_mut(&dimension) {
            entry.weight = weight;
        }
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.questions
            .get(&dimension)
            .map(|entry| entry.weight)
            .unwrap_or(0.0)
    }

    pub fn question(&self, dimension: Dimension) -> Option<&QuestionWeight> {
        self.questions.get(&dimension)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn weight_sum(&self) -> f64 {
        self.questions.values().map(|entry| entry.weight).sum()
    }

    /// Soft problems that still leave the configuration usable.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let weight_sum = self.weight_sum();
        if (weight_sum - 100.0).abs() > 0.001 {
            warnings.push(format!(
                "question weights sum to {weight_sum:.2}; composite scores are not on a 0-100 scale"
            ));
        }

        let t = &self.thresholds;
        if !(t.hot >= t.warm && t.warm >= t.lukewarm && t.lukewarm >= t.cold) {
            warnings.push(format!(
                "thresholds must descend (hot {} >= warm {} >= lukewarm {} >= cold {})",
                t.hot, t.warm, t.lukewarm, t.cold
            ));
        }

        for (name, value) in [
            ("hot", t.hot),
            ("warm", t.warm),
            ("lukewarm", t.lukewarm),
            ("cold", t.cold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                warnings.push(format!("thresholds.{name} = {value} is outside 0-100"));
            }
        }

        warnings
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Deserialize)]
struct RawScoringConfig {
    questions: BTreeMap<String, RawQuestion>,
    thresholds: Thresholds,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    weight: f64,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawScoringConfig> for ScoringConfig {
    type Error = ConfigShapeError;

    fn try_from(raw: RawScoringConfig) -> Result<Self, Self::Error> {
        let t = &raw.thresholds;
        for (name, value) in [
            ("hot", t.hot),
            ("warm", t.warm),
            ("lukewarm", t.lukewarm),
            ("cold", t.cold),
        ] {
            if !value.is_finite() {
                return Err(ConfigShapeError::InvalidThreshold(name));
            }
        }

        let mut questions = BTreeMap::new();
        for (key, question) in raw.questions {
            let Some(dimension) = Dimension::from_field(&key) else {
                tracing::warn!(question = %key, "ignoring unknown scoring question");
                continue;
            };
            if !question.weight.is_finite() || question.weight < 0.0 {
                return Err(ConfigShapeError::InvalidWeight(key));
            }
            questions.insert(
                dimension,
                QuestionWeight {
                    weight: question.weight,
                    label: question
                        .label
                        .filter(|label| !label.trim().is_empty())
                        .unwrap_or_else(|| dimension.default_label().to_string()),
                    description: question.description.unwrap_or_default(),
                },
            );
        }

        for dimension in Dimension::ALL {
            questions.entry(dimension).or_insert_with(|| QuestionWeight {
                weight: 0.0,
                label: dimension.default_label().to_string(),
                description: String::new(),
            });
        }

        Ok(Self {
            questions,
            thresholds: raw.thresholds,
        })
    }
}

/// Sub-scores for every question of one lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionScores(BTreeMap<Dimension, SubScore>);

impl QuestionScores {
    pub fn set(&mut self, dimension: Dimension, score: SubScore) {
        self.0.insert(dimension, score);
    }

    pub fn get(&self, dimension: Dimension) -> SubScore {
        self.0.get(&dimension).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_weights_sum_to_one_hundred() {
        let config = ScoringConfig::builtin();
        assert!((config.weight_sum() - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.weight(Dimension::CreditLimit), 20.0);
        assert_eq!(config.weight(Dimension::Gender), 0.0);
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn parse_full_configuration() {
        let json = r#"{
            "questions": {
                "creditLimit": {"weight": 40, "label": "Crédito", "description": "limite"},
                "income": {"weight": 60, "label": "Renda"}
            },
            "thresholds": {"hot": 90, "warm": 70, "lukewarm": 50, "cold": 0}
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(config.weight(Dimension::CreditLimit), 40.0);
        assert_eq!(config.weight(Dimension::Income), 60.0);
        assert_eq!(config.weight(Dimension::Age), 0.0);
        assert_eq!(
            config.question(Dimension::CreditLimit).map(|q| q.label.as_str()),
            Some("Crédito")
        );
        assert_eq!(
            config.question(Dimension::Age).map(|q| q.label.as_str()),
            Some("Faixa Etária")
        );
        assert_eq!(config.thresholds().hot, 90.0);
    }

    #[test]
    fn parse_rejects_missing_thresholds() {
        let json = r#"{"questions": {"income": {"weight": 10}}}"#;
        assert!(serde_json::from_str::<ScoringConfig>(json).is_err());
    }

    #[test]
    fn parse_rejects_legacy_flat_weights() {
        let json = r#"{"creditLimit": 20, "income": 15}"#;
        assert!(serde_json::from_str::<ScoringConfig>(json).is_err());
    }

    #[test]
    fn parse_rejects_negative_weight() {
        let json = r#"{
            "questions": {"income": {"weight": -5}},
            "thresholds": {"hot": 80, "warm": 60, "lukewarm": 40, "cold": 0}
        }"#;
        let err = serde_json::from_str::<ScoringConfig>(json).expect_err("should reject");
        assert!(err.to_string().contains("questions.income.weight"));
    }

    #[test]
    fn parse_ignores_unknown_questions() {
        let json = r#"{
            "questions": {"favoriteColor": {"weight": 50}, "income": {"weight": 50}},
            "thresholds": {"hot": 80, "warm": 60, "lukewarm": 40, "cold": 0}
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).expect("config should parse");
        assert!((config.weight_sum() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn warnings_flag_weight_sum_and_threshold_order() {
        let config = ScoringConfig::builtin()
            .with_weight(Dimension::Gender, 10.0)
            .with_thresholds(Thresholds {
                hot: 50.0,
                warm: 60.0,
                lukewarm: 40.0,
                cold: 0.0,
            });
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("sum to 110.00"));
        assert!(warnings[1].contains("thresholds must descend"));
    }

    #[test]
    fn serialized_config_round_trips_through_parser() {
        let config = ScoringConfig::builtin().with_weight(Dimension::Region, 7.5);
        let json = serde_json::to_string(&config).expect("config should serialize");
        assert!(json.contains("\"creditLimit\""));
        let parsed: ScoringConfig = serde_json::from_str(&json).expect("config should parse");
        assert_eq!(parsed, config);
    }
}
