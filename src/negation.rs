//! Two-token negation lookback.
//!
//! A keyword at `index` counts as negated when:
//!
//! 1. the token before it is a negation token ("not happy"),
//! 2. the token two before it is a negation token ("not feeling happy"), or
//! 3. the token before it contains `n't` or `not` anywhere ("shan't",
//!    "cannot" and other unsegmented contractions).
//!
//! This is a heuristic, not a parser. It ignores negation scope beyond two
//! tokens, double negation, and negation after the keyword. "I am no longer
//! happy" is not caught; "notebook happy" is.

/// Tokens that negate a keyword one or two positions later.
pub const NEGATION_TOKENS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "neither", "nor", "cannot", "can't",
    "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't",
    "wasnt", "aren't", "arent", "weren't", "werent", "won't", "wont", "wouldn't", "wouldnt",
    "shouldn't", "shouldnt", "couldn't", "couldnt", "haven't", "havent", "hasn't", "hasnt",
    "hadn't", "hadnt", "ain't", "aint",
];

/// Whether `token` is a negation token.
pub fn is_negation_token(token: &str) -> bool {
    NEGATION_TOKENS.contains(&token)
}

/// Whether the keyword at `index` in the lowercased token sequence is
/// negated. Always `false` at index 0.
pub fn is_negated<S: AsRef<str>>(index: usize, tokens: &[S]) -> bool {
    if index == 0 {
        return false;
    }
    let Some(prev): Option<&str> = tokens.get(index - 1).map(|t| t.as_ref()) else {
        return false;
    };
    if is_negation_token(prev) {
        return true;
    }
    if index >= 2 && tokens.get(index - 2).is_some_and(|t| is_negation_token(t.as_ref())) {
        return true;
    }
    prev.contains("n't") || prev.contains("not")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn first_token_is_never_negated() {
        assert!(!is_negated(0, &toks("happy not")));
        assert!(!is_negated(0, &toks("happy")));
    }

    #[test]
    fn immediate_negation() {
        let t = toks("i am not happy");
        assert!(is_negated(3, &t));
    }

    #[test]
    fn negation_two_tokens_back() {
        let t = toks("not feeling happy");
        assert!(is_negated(2, &t));
        let t = toks("never really sad");
        assert!(is_negated(2, &t));
    }

    #[test]
    fn negation_three_tokens_back_is_missed() {
        let t = toks("not really feeling happy");
        assert!(!is_negated(3, &t));
    }

    #[test]
    fn no_longer_is_not_caught_at_distance_two() {
        // "no" is two tokens before "longer", three before "happy".
        let t = toks("i am no longer very happy");
        assert!(!is_negated(5, &t));
    }

    #[test]
    fn contraction_substring_in_previous_token() {
        assert!(is_negated(1, &toks("shan't happy")));
        assert!(is_negated(1, &toks("mightn't cry")));
    }

    #[test]
    fn not_substring_over_fires() {
        // Known limitation: any previous token containing "not" negates.
        assert!(is_negated(1, &toks("notebook happy")));
        assert!(is_negated(1, &toks("knot sad")));
    }

    #[test]
    fn substring_check_applies_only_to_previous_token() {
        let t = toks("shan't really happy");
        assert!(!is_negated(2, &t));
    }

    #[test]
    fn plain_context_is_not_negated() {
        let t = toks("i am so happy today");
        assert!(!is_negated(3, &t));
    }

    #[test]
    fn index_past_end_uses_available_tokens() {
        let t = toks("not");
        assert!(is_negated(1, &t));
        assert!(!is_negated(5, &t));
    }

    #[test]
    fn works_with_owned_tokens() {
        let t: Vec<String> = vec!["never".into(), "happy".into()];
        assert!(is_negated(1, &t));
    }

    #[test]
    fn every_negation_token_negates_next_word() {
        for &neg in NEGATION_TOKENS {
            let t = [neg, "happy"];
            assert!(is_negated(1, &t), "{neg} should negate");
        }
    }
}
