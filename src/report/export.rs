use crate::error::Result;
use crate::types::lead::ScoredLead;
use std::collections::BTreeSet;
use std::io::Write;

pub const SCORE_COLUMN: &str = "calculatedScore";
pub const CATEGORY_COLUMN: &str = "scoreCategory";

/// Writes scored leads as CSV: every field seen in the batch, then the
/// score and tier columns.
pub fn write_scored_csv<W: Write>(writer: W, leads: &[ScoredLead]) -> Result<()> {
    let columns = leads
        .iter()
        .flat_map(|scored| scored.lead.fields().map(|(field, _)| field))
        .collect::<BTreeSet<_>>();

    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut header = columns.iter().copied().collect::<Vec<_>>();
    header.push(SCORE_COLUMN);
    header.push(CATEGORY_COLUMN);
    csv_writer.write_record(&header)?;

    for scored in leads {
        let mut row = columns
            .iter()
            .map(|field| scored.lead.get(field).unwrap_or_default().to_string())
            .collect::<Vec<_>>();
        row.push(scored.calculated_score.to_string());
        row.push(scored.score_category.label().to_string());
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
