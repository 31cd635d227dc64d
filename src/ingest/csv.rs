use super::headers::field_for_header;
use crate::types::lead::LeadRecord;
use std::io::Read;

/// Parses a spreadsheet export. When two columns feed the same field the
/// first non-empty one wins; blank rows are dropped.
pub fn parse_leads<R: Read>(reader: R) -> Result<Vec<LeadRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let fields = csv_reader
        .headers()?
        .iter()
        .map(field_for_header)
        .collect::<Vec<_>>();

    let mut leads = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut cells = fields
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.clone(), value.to_string()))
            .collect::<Vec<_>>();
        cells.reverse();

        let lead = cells.into_iter().collect::<LeadRecord>();
        if !lead.is_empty() {
            leads.push(lead);
        }
    }

    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sheet_export_with_question_headers() {
        let data = "\
Carimbo de data/hora,Nome,Qual o seu limite de crédito?,Qual é a sua renda mensal?,Gênero,utm_medium
2024-03-01 10:00:00,Ana, Acima de R$ 50.000 ,R$ 10.000,Feminino,cpc
2024-03-01 11:00:00,Bruno,,,,
";
        let leads = parse_leads(data.as_bytes()).expect("csv should parse");
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].get("creditLimit"), Some("Acima de R$ 50.000"));
        assert_eq!(leads[0].get("income"), Some("R$ 10.000"));
        assert_eq!(leads[0].get("utmMedium"), Some("cpc"));
        assert!(leads[0].is_surveyed());
        assert_eq!(leads[1].get("name"), Some("Bruno"));
        assert_eq!(leads[1].get("gender"), None);
        assert!(!leads[1].is_surveyed());
    }

    #[test]
    fn first_non_empty_column_wins_for_shared_field() {
        let data = "Estado,Cidade\nSão Paulo,Campinas\n,Curitiba\n";
        let leads = parse_leads(data.as_bytes()).expect("csv should parse");
        assert_eq!(leads[0].get("region"), Some("São Paulo"));
        assert_eq!(leads[1].get("region"), Some("Curitiba"));
    }

    #[test]
    fn short_rows_and_blank_rows_are_tolerated() {
        let data = "name,gender,income\nAna,F\n,,\n";
        let leads = parse_leads(data.as_bytes()).expect("csv should parse");
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].get("income"), None);
    }
}
