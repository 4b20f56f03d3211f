//! Line tokenizer for layout-preserving statement text.

use std::sync::LazyLock;

use regex::Regex;

/// Column gaps in the rendered layout are four or more spaces wide.
/// Runs of one to three spaces occur inside descriptions and must stay
/// part of the field.
static FIELD_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {4,}").unwrap());

/// Split one line into its fields on runs of 4+ spaces.
///
/// Total: never fails, fields may be empty, and no trimming happens
/// beyond what the split itself produces.
pub fn tokenize(line: &str) -> Vec<&str> {
    FIELD_GAP.split(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_spaces_separate_fields() {
        assert_eq!(tokenize("AAA    BBB"), vec!["AAA", "BBB"]);
        assert_eq!(tokenize("AAA        BBB"), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_short_runs_are_field_content() {
        assert_eq!(tokenize("SUPERMARKET ABC"), vec!["SUPERMARKET ABC"]);
        assert_eq!(tokenize("A  B   C"), vec!["A  B   C"]);
        assert_eq!(tokenize("PAGO REC.  AGENTE    42.50"), vec![
            "PAGO REC.  AGENTE",
            "42.50"
        ]);
    }

    #[test]
    fn test_leading_gap_yields_empty_field() {
        assert_eq!(tokenize("    15-12    SUPERMARKET ABC"), vec![
            "",
            "15-12",
            "SUPERMARKET ABC"
        ]);
    }

    #[test]
    fn test_line_without_gaps_is_one_field() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("TOTAL"), vec!["TOTAL"]);
    }
}
