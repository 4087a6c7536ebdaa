//! Lexical stress scoring.
//!
//! Every keyword in [`STRESS_KEYWORDS`] found anywhere in the lowercased
//! message (plain substring test, not negation-aware) adds its weight once.
//! The total is clamped to [`MAX_STRESS_SCORE`] and bucketed into a
//! [`StressLevel`]. Scoring never looks at the emotion category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the stress score. Larger sums are truncated.
pub const MAX_STRESS_SCORE: u8 = 10;

/// Scores at or above this are [`StressLevel::High`].
pub const HIGH_THRESHOLD: u8 = 7;

/// Scores at or above this (and below [`HIGH_THRESHOLD`]) are
/// [`StressLevel::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 4;

// ── Keyword table ───────────────────────────────────────────────────────

/// (keyword, weight). Substring match; each keyword counts at most once.
pub const STRESS_KEYWORDS: &[(&str, u8)] = &[
    // study
    ("exam", 3),
    ("test", 3),
    ("study", 2),
    ("assignment", 2),
    ("grade", 2),
    ("fail", 4),
    ("pass", 2),
    // work
    ("work", 2),
    ("deadline", 4),
    ("boss", 3),
    ("job", 2),
    ("office", 2),
    ("pressure", 4),
    ("overload", 4),
    // anxiety
    ("anxious", 4),
    ("worry", 3),
    ("nervous", 3),
    ("scared", 3),
    ("fear", 3),
    ("panic", 5),
    ("overthink", 3),
    // exhaustion
    ("tired", 2),
    ("exhausted", 3),
    ("burnout", 5),
    ("drained", 3),
    ("sleep", 1),
    // anger
    ("angry", 3),
    ("frustrated", 3),
    ("annoyed", 2),
    ("mad", 3),
    // sadness
    ("sad", 2),
    ("lonely", 3),
    ("alone", 2),
    ("cry", 2),
    // relationships
    ("relationship", 2),
    ("fight", 3),
    ("argument", 3),
    ("breakup", 4),
];

/// Coarse stress tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// Tier for a clamped integer score.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Tier for a fractional average, using the same thresholds.
    pub fn from_average(avg: f64) -> Self {
        if avg >= f64::from(HIGH_THRESHOLD) {
            Self::High
        } else if avg >= f64::from(MEDIUM_THRESHOLD) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Fixed marker shown next to the level.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score plus its derived tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressAssessment {
    pub score: u8,
    pub level: StressLevel,
}

impl StressAssessment {
    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

/// Sum the weights of all stress keywords present in `message`, clamped to
/// `0..=MAX_STRESS_SCORE`.
pub fn score(message: &str) -> u8 {
    let lower = message.to_lowercase();
    let total: u32 = STRESS_KEYWORDS
        .iter()
        .filter(|(kw, _)| lower.contains(*kw))
        .map(|&(_, weight)| u32::from(weight))
        .sum();
    // Clamped above, so the narrowing is lossless.
    total.min(u32::from(MAX_STRESS_SCORE)) as u8
}

/// Score `message` and derive its level.
pub fn assess(message: &str) -> StressAssessment {
    let score = score(message);
    StressAssessment {
        score,
        level: StressLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_message_scores_zero() {
        let a = assess("");
        assert_eq!(a.score, 0);
        assert_eq!(a.level, StressLevel::Low);
        assert_eq!(a.icon(), "🟢");
    }

    #[test]
    fn keyword_free_message_scores_zero() {
        assert_eq!(score("the weather is lovely today"), 0);
    }

    #[test]
    fn single_keyword_weight() {
        assert_eq!(score("I have a deadline"), 4);
        assert_eq!(score("PANIC"), 5);
    }

    #[test]
    fn substring_matching_counts_inflections() {
        // "failed" contains "fail", "exams" contains "exam".
        assert_eq!(score("failed exams"), 7);
    }

    #[test]
    fn substring_matching_is_not_negation_aware() {
        assert_eq!(score("I am not sad"), 2);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        assert_eq!(score("sleep sleep sleep sleep"), 1);
    }

    #[test]
    fn keyword_inside_longer_word_counts() {
        assert_eq!(score("homework"), 2);
        assert_eq!(score("bossy"), 3);
    }

    #[test]
    fn score_is_clamped() {
        let text = "exam test fail deadline panic burnout breakup pressure";
        assert_eq!(score(text), MAX_STRESS_SCORE);
        assert_eq!(assess(text).level, StressLevel::High);
    }

    #[test]
    fn score_never_exceeds_max_for_whole_table() {
        let everything: String = STRESS_KEYWORDS
            .iter()
            .map(|(kw, _)| *kw)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(score(&everything), MAX_STRESS_SCORE);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(StressLevel::from_score(0), StressLevel::Low);
        assert_eq!(StressLevel::from_score(3), StressLevel::Low);
        assert_eq!(StressLevel::from_score(4), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(6), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(7), StressLevel::High);
        assert_eq!(StressLevel::from_score(10), StressLevel::High);
    }

    #[test]
    fn average_boundaries() {
        assert_eq!(StressLevel::from_average(3.9), StressLevel::Low);
        assert_eq!(StressLevel::from_average(4.0), StressLevel::Medium);
        assert_eq!(StressLevel::from_average(6.9), StressLevel::Medium);
        assert_eq!(StressLevel::from_average(7.0), StressLevel::High);
    }

    #[test]
    fn icons_are_distinct() {
        let icons: HashSet<_> = [StressLevel::Low, StressLevel::Medium, StressLevel::High]
            .iter()
            .map(StressLevel::icon)
            .collect();
        assert_eq!(icons.len(), 3);
    }

    #[test]
    fn keyword_table_has_no_duplicates_and_valid_weights() {
        let mut seen = HashSet::new();
        for &(kw, weight) in STRESS_KEYWORDS {
            assert!(seen.insert(kw), "duplicate keyword {kw}");
            assert!((1..=5).contains(&weight), "weight out of range for {kw}");
        }
    }

    #[test]
    fn level_serializes_as_title_case() {
        let json = serde_json::to_string(&StressLevel::Medium).expect("serialize");
        assert_eq!(json, "\"Medium\"");
    }
}
