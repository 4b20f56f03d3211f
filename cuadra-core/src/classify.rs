//! Structural line classification.
//!
//! Lines are recognized by shape (section-marker prefixes, a date-shaped
//! token in a fixed column), never by keywords in free text: descriptions
//! can contain any words.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Left-stripped prefix of a holder section heading
/// ("DETALLE DE OPERACIONES ...").
const HOLDER_MARKER: &str = "DETALLE DE";

/// Left-stripped prefix of the monthly-limit block that ends the
/// monitored window. Extraction renders the heading unaccented.
const SECTION_END_MARKER: &str = "LIMITE MENSUAL";

/// "<First> <Last> - <4 digits>" in the second field of a holder heading.
static HOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<name>\S+ \S+) - (?P<card>\d{4})\s*$").unwrap());

/// Structural kind of one tokenized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    HolderHeader,
    SectionEnd,
    TransactionRow,
    Ignored,
}

pub fn is_holder_header(tokens: &[&str]) -> bool {
    tokens
        .first()
        .is_some_and(|t| t.trim_start().starts_with(HOLDER_MARKER))
}

pub fn is_section_end(tokens: &[&str]) -> bool {
    tokens
        .first()
        .is_some_and(|t| t.trim_start().starts_with(SECTION_END_MARKER))
}

/// Day-month signature: a '-' at byte 2 of the second field ("dd-mm").
/// Assumes the two-digit day rendering of this layout family; a
/// single-digit day does not match and the line is ignored.
pub fn is_transaction_row(tokens: &[&str]) -> bool {
    tokens.len() > 4 && tokens[1].as_bytes().get(2) == Some(&b'-')
}

/// Classify a tokenized line. Priority: holder heading, then section end,
/// then the transaction-row signature; everything else is page furniture.
pub fn classify(tokens: &[&str]) -> LineKind {
    if is_holder_header(tokens) {
        LineKind::HolderHeader
    } else if is_section_end(tokens) {
        LineKind::SectionEnd
    } else if is_transaction_row(tokens) {
        LineKind::TransactionRow
    } else {
        LineKind::Ignored
    }
}

/// Recover holder name and card last-4 from the second field of a holder
/// heading. `raw` is the untokenized line, attached to the error.
pub fn decode_holder_header(tokens: &[&str], raw: &str) -> Result<(String, String), ParseError> {
    let malformed = || ParseError::MalformedHolderHeader {
        line: raw.to_string(),
    };

    let field = tokens.get(1).ok_or_else(malformed)?;
    let caps = HOLDER_RE.captures(field).ok_or_else(malformed)?;
    Ok((caps["name"].to_string(), caps["card"].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn test_holder_heading_classifies_first() {
        let tokens = tokenize("DETALLE DE OPERACIONES    JUAN PEREZ - 0123");
        assert_eq!(classify(&tokens), LineKind::HolderHeader);
    }

    #[test]
    fn test_holder_heading_with_left_margin() {
        let tokens = tokenize("    DETALLE DE OPERACIONES    JUAN PEREZ - 0123");
        // Leading gap makes the first field empty; the marker sits in it
        // only after left-stripping a margin shorter than a gap.
        assert_eq!(classify(&tokens), LineKind::Ignored);

        let tokens = tokenize("  DETALLE DE OPERACIONES    JUAN PEREZ - 0123");
        assert_eq!(classify(&tokens), LineKind::HolderHeader);
    }

    #[test]
    fn test_decode_holder_header_fields() {
        let raw = "DETALLE DE OPERACIONES    JUAN PEREZ - 0123";
        let tokens = tokenize(raw);
        let (name, card) = decode_holder_header(&tokens, raw).unwrap();
        assert_eq!(name, "JUAN PEREZ");
        assert_eq!(card, "0123");
    }

    #[test]
    fn test_decode_holder_header_rejects_bad_pattern() {
        for field in ["JUAN PEREZ 0123", "JUAN - 0123", "JUAN PEREZ - 12345"] {
            let raw = format!("DETALLE DE OPERACIONES    {field}");
            let tokens = tokenize(&raw);
            let err = decode_holder_header(&tokens, &raw).unwrap_err();
            assert!(matches!(err, ParseError::MalformedHolderHeader { line } if line == raw));
        }
    }

    #[test]
    fn test_decode_holder_header_without_second_field() {
        let raw = "DETALLE DE OPERACIONES";
        let err = decode_holder_header(&tokenize(raw), raw).unwrap_err();
        assert!(matches!(err, ParseError::MalformedHolderHeader { .. }));
    }

    #[test]
    fn test_section_end() {
        let tokens = tokenize("LIMITE MENSUAL DE CREDITO    S/ 12,000.00");
        assert_eq!(classify(&tokens), LineKind::SectionEnd);
    }

    #[test]
    fn test_transaction_row_signature() {
        let tokens = tokenize("    15-12    SUPERMARKET ABC    LIMA    ---    42.50");
        assert_eq!(tokens.len(), 6);
        assert_eq!(classify(&tokens), LineKind::TransactionRow);

        let tokens = tokenize("    03-02    PHARMACY XYZ    150.00    ---");
        assert_eq!(tokens.len(), 5);
        assert_eq!(classify(&tokens), LineKind::TransactionRow);
    }

    #[test]
    fn test_short_line_with_date_is_ignored() {
        // Four fields: the signature needs more than four.
        let tokens = tokenize("    15-12    SUPERMARKET ABC    42.50");
        assert_eq!(tokens.len(), 4);
        assert_eq!(classify(&tokens), LineKind::Ignored);
    }

    #[test]
    fn test_single_digit_day_is_ignored() {
        // "3-12" puts the separator at byte 1, not byte 2. The known
        // layout always renders two-digit days; anything else falls
        // through to furniture rather than guessing.
        let tokens = tokenize("    3-12    SUPERMARKET ABC    LIMA    ---    42.50");
        assert_eq!(classify(&tokens), LineKind::Ignored);
    }

    #[test]
    fn test_furniture_is_ignored() {
        assert_eq!(classify(&tokenize("")), LineKind::Ignored);
        assert_eq!(classify(&tokenize("Pagina 2 de 5")), LineKind::Ignored);
        assert_eq!(
            classify(&tokenize("FECHA    DESCRIPCION    PAIS    M.N.    M.E.")),
            LineKind::Ignored
        );
    }
}
