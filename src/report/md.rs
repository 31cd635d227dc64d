use crate::scoring::LeadScore;
use crate::types::report::{BatchReport, Breakdown};

pub fn to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Lead Scoring Report\n\n");
    output.push_str(&format!(
        "- generated: {}\n- config: {:?} ({})\n- total leads: {}\n- surveyed leads: {}\n- average score: {}\n- hot leads: {}%\n\n",
        report.generated_at,
        report.config_source,
        short_fingerprint(&report.config_fingerprint),
        report.total_leads,
        report.surveyed_leads,
        report.average_score,
        report.hot_lead_percentage
    ));

    output.push_str("## Distribution\n\n");
    output.push_str("| Tier | Leads | Color |\n|---|---:|---|\n");
    for slice in &report.distribution {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            slice.name, slice.value, slice.color
        ));
    }
    output.push('\n');

    for breakdown in &report.breakdowns {
        push_breakdown(&mut output, breakdown);
    }

    output
}

fn push_breakdown(output: &mut String, breakdown: &Breakdown) {
    output.push_str(&format!("## By {}\n\n", breakdown.field));
    if breakdown.rows.is_empty() {
        output.push_str("- none\n\n");
        return;
    }

    output.push_str("| Group | Total | Alto | Médio | Baixo | Desqualificado |\n");
    output.push_str("|---|---:|---:|---:|---:|---:|\n");
    for row in &breakdown.rows {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            row.name.replace('|', "\\|"),
            row.total,
            row.alto,
            row.medio,
            row.baixo,
            row.desqualificado
        ));
    }
    output.push('\n');
}

/// Per-question table for one lead; `row` is its 1-based position.
pub fn explanation_to_markdown(row: usize, score: &LeadScore) -> String {
    let mut output = format!("# Lead {row}\n\n");
    output.push_str("| Question | Answer | Score | Weight | Contribution |\n");
    output.push_str("|---|---|---:|---:|---:|\n");
    for component in &score.components {
        let answer = if component.answer.is_empty() {
            "-"
        } else {
            component.answer.as_str()
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} |\n",
            component.dimension.field(),
            answer.replace('|', "\\|"),
            component.score,
            component.weight,
            component.contribution
        ));
    }
    output.push_str(&format!(
        "\nComposite: {} ({})\n",
        score.composite,
        score.tier.label()
    ));
    output
}

fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringEngine;
    use crate::types::lead::LeadRecord;
    use crate::types::report::{BreakdownRow, ConfigSource, TierCounts, TierSlice};
    use crate::types::scoring::ScoringConfig;

    fn report(breakdowns: Vec<Breakdown>) -> BatchReport {
        BatchReport {
            generated_at: "2024-03-01T00:00:00+00:00".to_string(),
            config_source: ConfigSource::Store,
            config_fingerprint: "0123456789abcdef0123".to_string(),
            total_leads: 3,
            surveyed_leads: 2,
            distribution: vec![TierSlice {
                name: "A - Hot Lead",
                value: 1,
                color: "#22c55e",
            }],
            average_score: 64,
            hot_lead_percentage: 50,
            breakdowns,
            leads: vec![],
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let counts = TierCounts {
            hot: 1,
            cold: 1,
            ..TierCounts::default()
        };
        let rendered = to_markdown(&report(vec![Breakdown {
            field: "utmMedium".to_string(),
            rows: vec![BreakdownRow::new("a|b".to_string(), &counts)],
        }]));

        assert!(rendered.contains("# Lead Scoring Report"));
        assert!(rendered.contains("- hot leads: 50%"));
        assert!(rendered.contains("Store (0123456789ab)"));
        assert!(rendered.contains("| A - Hot Lead | 1 | #22c55e |"));
        assert!(rendered.contains("## By utmMedium"));
        assert!(rendered.contains("| a\\|b | 2 | 1 | 0 | 0 | 1 |"));
    }

    #[test]
    fn explanation_lists_every_question() {
        let config = ScoringConfig::builtin();
        let lead = LeadRecord::new()
            .with("creditLimit", "Acima de R$ 50.000")
            .with("income", "R$ 10.000")
            .with("experience", "Sim, já invisto")
            .with("gender", "Feminino");
        let score = ScoringEngine::new(&config).score(&lead);

        let rendered = explanation_to_markdown(3, &score);
        assert!(rendered.starts_with("# Lead 3"));
        assert!(rendered.contains("| creditLimit | acima de r$ 50.000 | 100 | 20 | 20.00 |"));
        assert!(rendered.contains("| age | - | 0 | 10 | 0.00 |"));
        assert!(rendered.contains("Composite: 47 (C - Lukewarm)"));
    }

    #[test]
    fn empty_breakdown_renders_placeholder() {
        let rendered = to_markdown(&report(vec![Breakdown {
            field: "region".to_string(),
            rows: vec![],
        }]));
        assert!(rendered.contains("## By region\n\n- none"));
    }
}
