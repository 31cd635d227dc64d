//! Keyword tables for every survey question.
//!
//! Answers are free text, so one answer can carry several signals at once
//! ("R$ 5.000 a R$ 10.000"). Rules are listed highest score first and the
//! first rule with a matching keyword decides. Money questions then fall
//! back to the largest amount mentioned ("R$ 5.000 a R$ 10.000" reads as
//! 10 000).

use crate::types::scoring::{Dimension, SubScore};

#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub score: SubScore,
}

impl Rule {
    pub fn matches(&self, answer: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_keyword(answer, keyword))
    }
}

/// Minimum amount (in reais) a money answer must mention to earn `score`.
#[derive(Debug)]
pub struct AmountBracket {
    pub min: f64,
    pub score: SubScore,
}

#[derive(Debug)]
pub struct RuleTable {
    pub dimension: Dimension,
    pub rules: &'static [Rule],
    /// Checked after `rules`, against the largest amount in the answer.
    pub amounts: &'static [AmountBracket],
    /// Score for a non-empty answer no rule recognises.
    pub fallback: SubScore,
}

impl RuleTable {
    /// `answer` must already be normalized.
    pub fn score(&self, answer: &str) -> SubScore {
        if answer.is_empty() {
            return 0;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(answer))
            .map(|rule| rule.score)
            .or_else(|| self.amount_score(answer))
            .unwrap_or(self.fallback)
    }

    fn amount_score(&self, answer: &str) -> Option<SubScore> {
        if self.amounts.is_empty() {
            return None;
        }
        let largest = amounts_in(answer).into_iter().reduce(f64::max)?;
        self.amounts
            .iter()
            .find(|bracket| largest >= bracket.min)
            .map(|bracket| bracket.score)
    }
}

// A keyword that begins or ends with a digit must not touch another digit,
// so "5.000" does not match inside "15.000".
fn contains_keyword(answer: &str, keyword: &str) -> bool {
    let leading_digit = keyword.starts_with(|c: char| c.is_ascii_digit());
    let trailing_digit = keyword.ends_with(|c: char| c.is_ascii_digit());

    answer.match_indices(keyword).any(|(start, _)| {
        let before = answer[..start].chars().next_back();
        let after = answer[start + keyword.len()..].chars().next();
        !(leading_digit && before.is_some_and(|c| c.is_ascii_digit()))
            && !(trailing_digit && after.is_some_and(|c| c.is_ascii_digit()))
    })
}

/// Every amount written in `answer`: "50.000", "5.000,00", "30 mil", "10k",
/// "1,5 milhão".
pub fn amounts_in(answer: &str) -> Vec<f64> {
    let mut amounts = Vec::new();
    let mut rest = answer;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(tail.len());
        let number = tail[..end].trim_end_matches(|c| c == '.' || c == ',');

        if let Some(value) = parse_number(number) {
            let unit = tail[end..].trim_start();
            let multiplier = if unit.starts_with("milh") {
                1_000_000.0
            } else if unit.starts_with("mil") || unit.starts_with('k') {
                1_000.0
            } else {
                1.0
            };
            amounts.push(value * multiplier);
        }
        rest = &tail[end..];
    }

    amounts
}

// Dots group thousands unless the last group is not three digits long
// ("1.5"); a comma always starts the decimals.
fn parse_number(text: &str) -> Option<f64> {
    let (whole, fraction) = match text.split_once(',') {
        Some(parts) => parts,
        None => match text.rsplit_once('.') {
            Some((whole, fraction)) if fraction.len() != 3 => (whole, fraction),
            _ => (text, ""),
        },
    };

    let whole = whole
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    let mut value = whole.parse::<f64>().ok()?;
    let fraction = fraction
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    if !fraction.is_empty() {
        value += format!("0.{fraction}").parse::<f64>().ok()?;
    }
    Some(value)
}

const CREDIT_LIMIT: RuleTable = RuleTable {
    dimension: Dimension::CreditLimit,
    rules: &[Rule {
        keywords: &["acima de 50", "mais de 50"],
        score: 100,
    }],
    amounts: &[
        AmountBracket {
            min: 50_000.0,
            score: 100,
        },
        AmountBracket {
            min: 30_000.0,
            score: 80,
        },
        AmountBracket {
            min: 10_000.0,
            score: 60,
        },
        AmountBracket {
            min: 5_000.0,
            score: 40,
        },
    ],
    fallback: 20,
};

const INCOME: RuleTable = RuleTable {
    dimension: Dimension::Income,
    rules: &[Rule {
        keywords: &["acima de 20", "mais de 20"],
        score: 100,
    }],
    amounts: &[
        AmountBracket {
            min: 20_000.0,
            score: 100,
        },
        AmountBracket {
            min: 10_000.0,
            score: 80,
        },
        AmountBracket {
            min: 5_000.0,
            score: 60,
        },
        AmountBracket {
            min: 3_000.0,
            score: 40,
        },
    ],
    fallback: 20,
};

// No catch-all: an unrecognised experience answer carries no signal.
const EXPERIENCE: RuleTable = RuleTable {
    dimension: Dimension::Experience,
    rules: &[
        Rule {
            keywords: &["já invisto", "ja invisto", "invisto"],
            score: 100,
        },
        Rule {
            keywords: &["já comprei", "ja comprei", "comprei"],
            score: 80,
        },
        Rule {
            keywords: &["estudando", "estudo"],
            score: 55,
        },
        Rule {
            keywords: &["nunca"],
            score: 20,
        },
    ],
    amounts: &[],
    fallback: 0,
};

const FOLLOW_TIME: RuleTable = RuleTable {
    dimension: Dimension::FollowTime,
    rules: &[
        Rule {
            keywords: &["mais de 2 anos", "acima de 2 anos", "mais de dois anos"],
            score: 100,
        },
        Rule {
            keywords: &["1 a 2 anos", "entre 1 e 2 anos", "1 ano a 2 anos"],
            score: 80,
        },
        Rule {
            keywords: &["6 meses a 1 ano", "entre 6 meses e 1 ano"],
            score: 60,
        },
        Rule {
            keywords: &["3 a 6 meses", "entre 3 e 6 meses"],
            score: 40,
        },
    ],
    amounts: &[],
    fallback: 20,
};

const SOCIAL_NETWORK: RuleTable = RuleTable {
    dimension: Dimension::SocialNetwork,
    rules: &[
        Rule {
            keywords: &["youtube"],
            score: 100,
        },
        Rule {
            keywords: &["instagram", "telegram"],
            score: 75,
        },
        Rule {
            keywords: &["tiktok", "tik tok"],
            score: 60,
        },
        Rule {
            keywords: &["facebook"],
            score: 40,
        },
    ],
    amounts: &[],
    fallback: 20,
};

const AGE: RuleTable = RuleTable {
    dimension: Dimension::Age,
    rules: &[
        Rule {
            keywords: &["35 a 44", "35-44"],
            score: 100,
        },
        Rule {
            keywords: &["45 a 54", "45-54"],
            score: 90,
        },
        Rule {
            keywords: &["25 a 34", "25-34"],
            score: 80,
        },
        Rule {
            keywords: &["55 a 64", "55-64"],
            score: 70,
        },
        Rule {
            keywords: &["65 ou mais", "mais de 65", "acima de 65", "65+"],
            score: 50,
        },
        Rule {
            keywords: &["18 a 24", "18-24"],
            score: 40,
        },
    ],
    amounts: &[],
    fallback: 30,
};

const PROFESSION: RuleTable = RuleTable {
    dimension: Dimension::Profession,
    rules: &[
        Rule {
            keywords: &[
                "empresári",
                "empresari",
                "empreendedor",
                "autônom",
                "autonom",
                "investidor",
            ],
            score: 100,
        },
        Rule {
            keywords: &[
                "servidor públic",
                "servidor public",
                "funcionário públic",
                "funcionario public",
                "concursad",
                "profissional liberal",
                "médic",
                "medic",
                "advogad",
                "engenheir",
                "arquitet",
                "dentista",
            ],
            score: 90,
        },
        Rule {
            keywords: &["clt", "assalariad", "carteira assinada"],
            score: 70,
        },
        Rule {
            keywords: &["aposentad"],
            score: 60,
        },
        Rule {
            keywords: &["estudante"],
            score: 40,
        },
        Rule {
            keywords: &["desempregad"],
            score: 20,
        },
    ],
    amounts: &[],
    fallback: 50,
};

const OBJECTION: RuleTable = RuleTable {
    dimension: Dimension::Objection,
    rules: &[
        Rule {
            keywords: &["nenhum", "nada", "sem obje"],
            score: 100,
        },
        Rule {
            keywords: &["tempo", "conhecimento"],
            score: 70,
        },
        Rule {
            keywords: &["capital", "dinheiro"],
            score: 50,
        },
        Rule {
            keywords: &["medo"],
            score: 40,
        },
        Rule {
            keywords: &["desconfian", "golpe"],
            score: 20,
        },
    ],
    amounts: &[],
    fallback: 50,
};

const REGION: RuleTable = RuleTable {
    dimension: Dimension::Region,
    rules: &[
        Rule {
            keywords: &["são paulo", "sao paulo", "rio de janeiro"],
            score: 100,
        },
        Rule {
            keywords: &[
                "paraná",
                "parana",
                "santa catarina",
                "rio grande do sul",
                "goiás",
                "goias",
                "mato grosso",
                "distrito federal",
                "brasília",
                "brasilia",
                "minas gerais",
                "centro-oeste",
                "sul",
            ],
            score: 65,
        },
    ],
    amounts: &[],
    fallback: 35,
};

const MARITAL_STATUS: RuleTable = RuleTable {
    dimension: Dimension::MaritalStatus,
    rules: &[
        Rule {
            keywords: &["casad", "união estável", "uniao estavel"],
            score: 100,
        },
        Rule {
            keywords: &["divorciad", "separad", "viúv", "viuv"],
            score: 100,
        },
        Rule {
            keywords: &["solteir"],
            score: 50,
        },
    ],
    amounts: &[],
    fallback: 50,
};

// Neutral question: any answer scores the same.
const GENDER: RuleTable = RuleTable {
    dimension: Dimension::Gender,
    rules: &[],
    amounts: &[],
    fallback: 50,
};

pub fn table(dimension: Dimension) -> &'static RuleTable {
    match dimension {
        Dimension::CreditLimit => &CREDIT_LIMIT,
        Dimension::Income => &INCOME,
        Dimension::Experience => &EXPERIENCE,
        Dimension::FollowTime => &FOLLOW_TIME,
        Dimension::SocialNetwork => &SOCIAL_NETWORK,
        Dimension::Age => &AGE,
        Dimension::Profession => &PROFESSION,
        Dimension::Objection => &OBJECTION,
        Dimension::Region => &REGION,
        Dimension::MaritalStatus => &MARITAL_STATUS,
        Dimension::Gender => &GENDER,
    }
}

pub fn score_answer(dimension: Dimension, answer: &str) -> SubScore {
    table(dimension).score(answer)
}
