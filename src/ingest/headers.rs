use crate::types::lead::fields;
use crate::types::scoring::Dimension;

struct HeaderAlias {
    keywords: &'static [&'static str],
    field: &'static str,
}

// Checked in order; more specific headers come before the ones they contain
// ("estado civil" before "estado", "rede social" before "acompanha",
// "cidade" before "idade").
const HEADER_ALIASES: &[HeaderAlias] = &[
    HeaderAlias {
        keywords: &["utm_source", "utm source"],
        field: fields::UTM_SOURCE,
    },
    HeaderAlias {
        keywords: &["utm_medium", "utm medium"],
        field: fields::UTM_MEDIUM,
    },
    HeaderAlias {
        keywords: &["utm_campaign", "utm campaign"],
        field: fields::UTM_CAMPAIGN,
    },
    HeaderAlias {
        keywords: &["utm_content", "utm content"],
        field: fields::UTM_CONTENT,
    },
    HeaderAlias {
        keywords: &["utm_term", "utm term"],
        field: fields::UTM_TERM,
    },
    HeaderAlias {
        keywords: &["estado civil"],
        field: "maritalStatus",
    },
    HeaderAlias {
        keywords: &["impede", "objeção", "objecao", "dificuldade"],
        field: "objection",
    },
    HeaderAlias {
        keywords: &["rede social", "redes sociais"],
        field: "socialNetwork",
    },
    HeaderAlias {
        keywords: &["quanto tempo", "tempo que", "acompanha"],
        field: "followTime",
    },
    HeaderAlias {
        keywords: &["limite"],
        field: "creditLimit",
    },
    HeaderAlias {
        keywords: &["renda", "faturamento", "ganha por mês"],
        field: "income",
    },
    HeaderAlias {
        keywords: &[
            "experiência",
            "experiencia",
            "já investe",
            "ja investe",
            "você investe",
            "voce investe",
        ],
        field: "experience",
    },
    HeaderAlias {
        keywords: &["região", "regiao", "estado", "cidade"],
        field: "region",
    },
    HeaderAlias {
        keywords: &["idade", "faixa etária", "faixa etaria"],
        field: "age",
    },
    HeaderAlias {
        keywords: &["profissão", "profissao", "ocupação", "ocupacao"],
        field: "profession",
    },
    HeaderAlias {
        keywords: &["gênero", "genero", "sexo"],
        field: "gender",
    },
    HeaderAlias {
        keywords: &["e-mail", "email"],
        field: fields::EMAIL,
    },
    HeaderAlias {
        keywords: &["telefone", "whatsapp", "celular", "phone"],
        field: fields::PHONE,
    },
    HeaderAlias {
        keywords: &["nome", "name"],
        field: fields::NAME,
    },
    HeaderAlias {
        keywords: &[
            "carimbo de data",
            "timestamp",
            "data de cadastro",
            "created_at",
            "data",
        ],
        field: fields::TIMESTAMP,
    },
];

const KNOWN_FIELDS: &[&str] = &[
    fields::NAME,
    fields::EMAIL,
    fields::PHONE,
    fields::TIMESTAMP,
    fields::UTM_SOURCE,
    fields::UTM_MEDIUM,
    fields::UTM_CAMPAIGN,
    fields::UTM_CONTENT,
    fields::UTM_TERM,
];

/// Lead field a spreadsheet column feeds. Exact field names win, then the
/// Portuguese question text; anything else keeps its trimmed header.
pub fn field_for_header(header: &str) -> String {
    let trimmed = header.trim();

    if let Some(dimension) = Dimension::ALL
        .into_iter()
        .find(|dimension| dimension.field().eq_ignore_ascii_case(trimmed))
    {
        return dimension.field().to_string();
    }
    if let Some(field) = KNOWN_FIELDS
        .iter()
        .find(|field| field.eq_ignore_ascii_case(trimmed))
    {
        return (*field).to_string();
    }

    let normalized = trimmed.to_lowercase();
    HEADER_ALIASES
        .iter()
        .find(|alias| {
            alias
                .keywords
                .iter()
                .any(|keyword| normalized.contains(keyword))
        })
        .map(|alias| alias.field.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_field_names_are_case_insensitive() {
        assert_eq!(field_for_header("creditLimit"), "creditLimit");
        assert_eq!(field_for_header("CREDITLIMIT"), "creditLimit");
        assert_eq!(field_for_header(" utmMedium "), "utmMedium");
    }

    #[test]
    fn survey_questions_map_to_dimensions() {
        assert_eq!(
            field_for_header("Qual o seu limite de crédito?"),
            "creditLimit"
        );
        assert_eq!(field_for_header("Qual é a sua renda mensal?"), "income");
        assert_eq!(
            field_for_header("Você já investe na bolsa? (experiência)"),
            "experience"
        );
        assert_eq!(
            field_for_header("Há quanto tempo você me acompanha?"),
            "followTime"
        );
        assert_eq!(
            field_for_header("Em qual rede social você mais me acompanha?"),
            "socialNetwork"
        );
        assert_eq!(field_for_header("Qual a sua idade?"), "age");
        assert_eq!(field_for_header("Qual a sua profissão?"), "profession");
        assert_eq!(
            field_for_header("O que te impede de investir hoje?"),
            "objection"
        );
        assert_eq!(field_for_header("Em qual estado você mora?"), "region");
        assert_eq!(field_for_header("Cidade"), "region");
        assert_eq!(field_for_header("Qual a sua cidade?"), "region");
        assert_eq!(field_for_header("Idade"), "age");
        assert_eq!(field_for_header("Faixa etária"), "age");
        assert_eq!(field_for_header("Estado civil"), "maritalStatus");
        assert_eq!(field_for_header("Gênero"), "gender");
    }

    #[test]
    fn attribution_and_contact_columns() {
        assert_eq!(field_for_header("utm_medium"), "utmMedium");
        assert_eq!(field_for_header("UTM Content"), "utmContent");
        assert_eq!(field_for_header("E-mail"), "email");
        assert_eq!(field_for_header("WhatsApp"), "phone");
        assert_eq!(field_for_header("Nome completo"), "name");
        assert_eq!(field_for_header("Carimbo de data/hora"), "timestamp");
    }

    #[test]
    fn unknown_headers_are_kept() {
        assert_eq!(field_for_header("  Observações "), "Observações");
    }
}
