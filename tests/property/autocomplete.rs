//! Property tests for the autocomplete query.
//!
//! Verifies that:
//! 1. `all_matches` is sound (everything returned starts with the prefix)
//! 2. `all_matches` is complete (nothing that starts with the prefix is
//!    dropped), even with duplicate texts
//! 3. Results are sorted by weight descending
//! 4. Prefix matching counts characters, not bytes

use proptest::prelude::*;
use typeahead::{Autocomplete, Term};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like term texts over a narrow alphabet, so random prefixes
/// actually hit something.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,6}").unwrap()
}

/// Texts with multi-byte characters mixed in.
fn unicode_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aé日]{0,4}").unwrap()
}

fn terms_strategy() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(
        (text_strategy(), 0u64..1000).prop_map(|(t, w)| Term::new(t, w)),
        0..40,
    )
}

fn unicode_terms_strategy() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(
        (unicode_text_strategy(), 0u64..1000).prop_map(|(t, w)| Term::new(t, w)),
        0..30,
    )
}

/// Multiset view of (text, weight) pairs, for completeness comparisons
/// that ignore order.
fn as_multiset(terms: &[Term]) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = terms
        .iter()
        .map(|t| (t.text().to_string(), t.weight()))
        .collect();
    pairs.sort();
    pairs
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Exactly the terms whose text starts with the prefix come back.
    #[test]
    fn prop_matches_are_exactly_the_prefixed_terms(
        terms in terms_strategy(),
        prefix in text_strategy()
    ) {
        let expected: Vec<Term> = terms
            .iter()
            .filter(|t| t.text().starts_with(&prefix))
            .cloned()
            .collect();

        let ac = Autocomplete::new(terms);
        let matches = ac.all_matches(&prefix);

        prop_assert_eq!(as_multiset(&matches), as_multiset(&expected));
    }

    /// Results are sorted by weight descending.
    #[test]
    fn prop_matches_sorted_by_weight_desc(
        terms in terms_strategy(),
        prefix in text_strategy()
    ) {
        let ac = Autocomplete::new(terms);
        let matches = ac.all_matches(&prefix);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].weight() >= pair[1].weight());
        }
    }

    /// The empty prefix returns every term.
    #[test]
    fn prop_empty_prefix_returns_all(terms in terms_strategy()) {
        let n = terms.len();
        let ac = Autocomplete::new(terms);
        prop_assert_eq!(ac.all_matches("").len(), n);
        prop_assert_eq!(ac.number_of_matches(""), n);
    }

    /// number_of_matches agrees with all_matches.
    #[test]
    fn prop_count_agrees_with_matches(
        terms in terms_strategy(),
        prefix in text_strategy()
    ) {
        let ac = Autocomplete::new(terms);
        prop_assert_eq!(ac.number_of_matches(&prefix), ac.all_matches(&prefix).len());
    }

    /// Character-based prefix matching holds for multi-byte texts too.
    #[test]
    fn prop_unicode_prefix_matching(
        terms in unicode_terms_strategy(),
        prefix in unicode_text_strategy()
    ) {
        let expected: Vec<Term> = terms
            .iter()
            .filter(|t| t.text().starts_with(&prefix))
            .cloned()
            .collect();

        let ac = Autocomplete::new(terms);
        let matches = ac.all_matches(&prefix);

        prop_assert_eq!(as_multiset(&matches), as_multiset(&expected));
    }
}
