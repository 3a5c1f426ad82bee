//! Text signals used by the rubric.
//!
//! Pattern matching only; there is no language analysis here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Closed set of verbs that count as "action verbs" in a summary.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "implemented",
    "managed",
    "created",
    "orchestrated",
    "optimized",
    "resolved",
    "mentored",
    "scaled",
    "launched",
];

/// Digits, optionally followed by `%`, `k` or `x`.
static MEASURABLE_IMPACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[0-9]+(?:%|k|x)?").expect("valid impact regex"));

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = ACTION_VERBS.join("|");
    Regex::new(&format!(r"(?i)(?:{alternation})")).expect("valid action verb regex")
});

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when the text states a number, percentage, or `k`/`x` multiplier.
pub fn has_measurable_impact(text: &str) -> bool {
    MEASURABLE_IMPACT_RE.is_match(text)
}

/// True when any action verb appears anywhere in the text, ignoring case.
pub fn has_action_verb(text: &str) -> bool {
    ACTION_VERB_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_is_measurable() {
        assert!(has_measurable_impact("Improved latency by 30%"));
    }

    #[test]
    fn test_vague_claim_is_not_measurable() {
        assert!(!has_measurable_impact("Improved latency significantly"));
    }

    #[test]
    fn test_multipliers_and_plain_counts_are_measurable() {
        assert!(has_measurable_impact("Served 10K users"));
        assert!(has_measurable_impact("3x faster builds"));
        assert!(has_measurable_impact("Trained 15 engineers"));
    }

    #[test]
    fn test_empty_text_has_no_signals() {
        assert!(!has_measurable_impact(""));
        assert!(!has_action_verb(""));
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_action_verb_is_case_insensitive() {
        assert!(has_action_verb("LED a team of four"));
        assert!(has_action_verb("I have optimized pipelines."));
    }

    #[test]
    fn test_action_verb_matches_inside_words() {
        assert!(has_action_verb("Rebuilt the billing platform and shipped it"));
        assert!(has_action_verb("Skilled and detail-oriented"));
        assert!(!has_action_verb("Curious generalist"));
    }

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
    }
}
