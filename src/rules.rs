//! The ordered category rule table.
//!
//! Rules are evaluated top to bottom and the first rule that produces a
//! [`Route`] wins. The order of [`CATEGORY_RULES`] is the classifier's
//! priority order; tests pin it.

use crate::negation::is_negated;
use heartline_catalog::{AgeGroup, BucketKey, Category, Reason};

/// What a rule does when its keyword is negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegationPolicy {
    /// The first keyword hit decides. Negated → sadness (`negated` reason),
    /// otherwise the rule's own category.
    RedirectToNegatedSadness,
    /// The first keyword hit decides. Negated → gentle conversation,
    /// otherwise the rule's own category.
    SuppressToDefault,
    /// Any non-negated hit selects the rule's category. Negated hits are
    /// ignored and evaluation moves on to the next rule.
    SkipCategory,
}

/// One entry in the priority table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    /// Exact-token keywords (lowercase).
    pub keywords: &'static [&'static str],
    pub policy: NegationPolicy,
}

/// Where a message is routed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub category: Category,
    pub reason: Reason,
    /// The keyword that decided the route; `None` for the fallback.
    pub matched: Option<&'static str>,
}

impl Route {
    /// Route used when no rule matched.
    pub const FALLBACK: Route = Route {
        category: Category::GentleConversation,
        reason: Reason::General,
        matched: None,
    };

    /// Catalog key for this route in `age_group`.
    pub fn key(&self, age_group: AgeGroup) -> BucketKey {
        BucketKey {
            category: self.category,
            age_group,
            reason: self.reason,
        }
    }
}

// ── Rule table ──────────────────────────────────────────────────────────

/// Category rules in priority order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Happiness,
        keywords: &[
            "happy", "glad", "joyful", "cheerful", "delighted", "thrilled", "excited", "grateful",
            "wonderful", "amazing", "fantastic",
        ],
        policy: NegationPolicy::RedirectToNegatedSadness,
    },
    CategoryRule {
        category: Category::Sadness,
        keywords: &[
            "sad", "cry", "crying", "cried", "lonely", "alone", "depressed", "empty", "hurt",
            "heartbroken", "unhappy", "miserable", "upset",
        ],
        policy: NegationPolicy::SuppressToDefault,
    },
    CategoryRule {
        category: Category::ExamStress,
        keywords: &[
            "exam", "exams", "test", "tests", "study", "studying", "assignment", "assignments",
            "grade", "grades", "fail", "failed", "failing", "pass", "paper", "homework", "quiz",
        ],
        policy: NegationPolicy::SkipCategory,
    },
    CategoryRule {
        category: Category::WorkPressure,
        keywords: &[
            "work", "working", "deadline", "deadlines", "boss", "job", "office", "colleague",
            "colleagues", "pressure", "overload", "overloaded", "manager", "meeting",
        ],
        policy: NegationPolicy::SkipCategory,
    },
    CategoryRule {
        category: Category::Anger,
        keywords: &[
            "angry", "frustrated", "annoyed", "mad", "irritated", "hate", "furious", "pissed",
        ],
        policy: NegationPolicy::SkipCategory,
    },
    CategoryRule {
        category: Category::Anxiety,
        keywords: &[
            "anxious", "anxiety", "worry", "worried", "nervous", "scared", "fear", "afraid",
            "panic", "overthink", "overthinking", "stress", "stressed",
        ],
        policy: NegationPolicy::SkipCategory,
    },
    CategoryRule {
        category: Category::Burnout,
        keywords: &[
            "tired", "exhausted", "burnout", "burnt", "drained", "sleep", "sleepless", "fatigue",
            "fatigued", "worn",
        ],
        policy: NegationPolicy::SkipCategory,
    },
    CategoryRule {
        category: Category::Relationship,
        keywords: &[
            "relationship", "boyfriend", "girlfriend", "partner", "husband", "wife", "friend",
            "friends", "fight", "argument", "love", "breakup",
        ],
        policy: NegationPolicy::SkipCategory,
    },
];

impl CategoryRule {
    fn position(&self, tokens: &[String], from: usize) -> Option<(usize, &'static str)> {
        tokens.iter().enumerate().skip(from).find_map(|(i, t)| {
            self.keywords
                .iter()
                .find(|kw| **kw == t.as_str())
                .map(|kw| (i, *kw))
        })
    }

    /// Apply this rule to lowercased tokens. `None` means evaluation should
    /// continue with the next rule.
    pub fn evaluate(&self, tokens: &[String]) -> Option<Route> {
        match self.policy {
            NegationPolicy::RedirectToNegatedSadness => {
                let (index, kw) = self.position(tokens, 0)?;
                Some(if is_negated(index, tokens) {
                    Route {
                        category: Category::Sadness,
                        reason: Reason::Negated,
                        matched: Some(kw),
                    }
                } else {
                    self.route(kw)
                })
            }
            NegationPolicy::SuppressToDefault => {
                let (index, kw) = self.position(tokens, 0)?;
                Some(if is_negated(index, tokens) {
                    Route {
                        matched: Some(kw),
                        ..Route::FALLBACK
                    }
                } else {
                    self.route(kw)
                })
            }
            NegationPolicy::SkipCategory => {
                let mut from = 0;
                while let Some((index, kw)) = self.position(tokens, from) {
                    if !is_negated(index, tokens) {
                        return Some(self.route(kw));
                    }
                    from = index + 1;
                }
                None
            }
        }
    }

    fn route(&self, kw: &'static str) -> Route {
        Route {
            category: self.category,
            reason: Reason::General,
            matched: Some(kw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    fn rule(category: Category) -> &'static CategoryRule {
        CATEGORY_RULES
            .iter()
            .find(|r| r.category == category)
            .unwrap_or_else(|| unreachable!("every scanned category has a rule"))
    }

    #[test]
    fn priority_order_is_pinned() {
        let order: Vec<_> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Happiness,
                Category::Sadness,
                Category::ExamStress,
                Category::WorkPressure,
                Category::Anger,
                Category::Anxiety,
                Category::Burnout,
                Category::Relationship,
            ]
        );
    }

    #[test]
    fn policies_match_categories() {
        assert_eq!(
            rule(Category::Happiness).policy,
            NegationPolicy::RedirectToNegatedSadness
        );
        assert_eq!(rule(Category::Sadness).policy, NegationPolicy::SuppressToDefault);
        for r in &CATEGORY_RULES[2..] {
            assert_eq!(r.policy, NegationPolicy::SkipCategory, "{}", r.category);
        }
    }

    #[test]
    fn keywords_are_lowercase_single_tokens() {
        for r in CATEGORY_RULES {
            for kw in r.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{kw}");
                assert!(!kw.contains(char::is_whitespace), "{kw}");
            }
        }
    }

    #[test]
    fn keywords_do_not_overlap_between_rules() {
        let mut seen = HashSet::new();
        for r in CATEGORY_RULES {
            for kw in r.keywords {
                assert!(seen.insert(*kw), "{kw} appears in more than one rule");
            }
        }
    }

    #[test]
    fn happiness_negated_redirects_to_sadness() {
        let route = rule(Category::Happiness).evaluate(&toks("i am not happy"));
        assert_eq!(
            route,
            Some(Route {
                category: Category::Sadness,
                reason: Reason::Negated,
                matched: Some("happy"),
            })
        );
    }

    #[test]
    fn happiness_only_first_hit_counts() {
        // First hit is negated; the later plain hit does not rescue it.
        let route = rule(Category::Happiness)
            .evaluate(&toks("not happy but glad"))
            .map(|r| r.category);
        assert_eq!(route, Some(Category::Sadness));
    }

    #[test]
    fn sadness_negated_falls_to_default() {
        let route = rule(Category::Sadness).evaluate(&toks("i am not sad"));
        assert_eq!(route.map(|r| r.category), Some(Category::GentleConversation));
        assert_eq!(route.and_then(|r| r.matched), Some("sad"));
    }

    #[test]
    fn skip_category_ignores_negated_hits() {
        assert_eq!(rule(Category::Burnout).evaluate(&toks("not tired")), None);
    }

    #[test]
    fn skip_category_finds_later_plain_hit() {
        let route = rule(Category::Burnout).evaluate(&toks("not tired just exhausted"));
        assert_eq!(route.and_then(|r| r.matched), Some("exhausted"));
    }

    #[test]
    fn no_keyword_no_route() {
        for r in CATEGORY_RULES {
            assert_eq!(r.evaluate(&toks("the cat sat on the mat")), None);
        }
        assert_eq!(rule(Category::Anger).evaluate(&[]), None);
    }

    #[test]
    fn route_key_carries_reason() {
        let route = Route {
            category: Category::Sadness,
            reason: Reason::Negated,
            matched: Some("happy"),
        };
        assert_eq!(
            route.key(AgeGroup::Adult),
            BucketKey::negated_sadness(AgeGroup::Adult)
        );
        assert_eq!(
            Route::FALLBACK.key(AgeGroup::Teen),
            BucketKey::new(Category::GentleConversation, AgeGroup::Teen)
        );
    }
}
