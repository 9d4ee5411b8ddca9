//! Text predicates over captured streams.

use crate::core::types::TextOperator;

/// Apply `op` to `actual` against `reference`.
///
/// Comparisons are exact (no case folding or trimming). An empty `reference`
/// is contained in every `actual`.
pub fn evaluate_text(actual: &str, op: TextOperator, reference: &str) -> bool {
    match op {
        TextOperator::Is => actual == reference,
        TextOperator::IsNot => actual != reference,
        TextOperator::Contains => actual.contains(reference),
        TextOperator::ContainsNot => !actual.contains(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &["", "build OK", "OK", "ok", "line one\nline two\n", "é✓"];

    #[test]
    fn is_and_is_not_are_negations() {
        for actual in SAMPLES {
            for reference in SAMPLES {
                assert_ne!(
                    evaluate_text(actual, TextOperator::Is, reference),
                    evaluate_text(actual, TextOperator::IsNot, reference),
                    "actual={actual:?} reference={reference:?}"
                );
            }
        }
    }

    #[test]
    fn contains_and_contains_not_are_negations() {
        for actual in SAMPLES {
            for reference in SAMPLES {
                assert_ne!(
                    evaluate_text(actual, TextOperator::Contains, reference),
                    evaluate_text(actual, TextOperator::ContainsNot, reference),
                    "actual={actual:?} reference={reference:?}"
                );
            }
        }
    }

    #[test]
    fn empty_reference_is_always_contained() {
        for actual in SAMPLES {
            assert!(evaluate_text(actual, TextOperator::Contains, ""));
            assert!(!evaluate_text(actual, TextOperator::ContainsNot, ""));
        }
    }

    #[test]
    fn comparisons_are_case_sensitive() {
        assert!(!evaluate_text("build OK", TextOperator::Contains, "ok"));
        assert!(evaluate_text("build OK", TextOperator::ContainsNot, "ok"));
        assert!(!evaluate_text("OK", TextOperator::Is, "ok"));
    }

    #[test]
    fn is_does_not_trim_trailing_newline() {
        assert!(!evaluate_text("OK\n", TextOperator::Is, "OK"));
        assert!(evaluate_text("OK\n", TextOperator::Contains, "OK"));
    }

    #[test]
    fn contains_matches_across_lines() {
        let actual = "line one\nline two\n";
        assert!(evaluate_text(actual, TextOperator::Contains, "one\nline"));
    }
}
