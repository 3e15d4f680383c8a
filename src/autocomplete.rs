// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The autocomplete structure: a sorted term list plus prefix queries.
//!
//! Construction sorts its terms lexicographically exactly once; that sorted
//! `Vec<Term>` is the single authoritative storage, there is no side index.
//! Each query runs two range binary searches to bound the contiguous run of
//! prefix-equal terms, then re-ranks a copy of that run by descending
//! weight. Queries never touch shared mutable state, so a built structure
//! can be shared freely across reader threads.
//!
//! # Invariant
//!
//! `self.terms` is sorted in natural (lexicographic) order from the moment
//! `new` returns until the structure is dropped. Every query depends on it.

use crate::search::{first_index_of, last_index_of};
use crate::term::{by_prefix_order, by_reverse_weight_order, Term};

/// Fixed collection of weighted terms answering prefix queries.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    /// Sorted lexicographically by text; read-only after construction.
    terms: Vec<Term>,
}

impl Autocomplete {
    /// Build the structure from a collection of terms.
    ///
    /// Takes ownership and sorts; O(n log n), paid once. Duplicate terms are
    /// kept as given.
    pub fn new(mut terms: Vec<Term>) -> Self {
        terms.sort();
        Autocomplete { terms }
    }

    /// All terms whose text starts with `prefix`, heaviest first.
    ///
    /// The empty prefix matches every term. Equal-weight matches come back
    /// in an unspecified relative order. The stored terms are not touched;
    /// each call allocates its own result.
    pub fn all_matches(&self, prefix: &str) -> Vec<Term> {
        let probe = Term::new(prefix, 0);
        let cmp = by_prefix_order(prefix.chars().count());

        let Some(first) = first_index_of(&self.terms, &probe, &cmp) else {
            return Vec::new();
        };
        // Equal-under-comparator terms form one contiguous run in a sorted
        // slice, so `last` is guaranteed once `first` was found.
        let last = last_index_of(&self.terms, &probe, &cmp)
            .unwrap_or(first);

        let mut matches = self.terms[first..=last].to_vec();
        matches.sort_by(by_reverse_weight_order());
        matches
    }

    /// How many terms match `prefix`, without materializing them.
    ///
    /// Same two binary searches as [`all_matches`](Self::all_matches),
    /// O(log n) total.
    pub fn number_of_matches(&self, prefix: &str) -> usize {
        let probe = Term::new(prefix, 0);
        let cmp = by_prefix_order(prefix.chars().count());

        match first_index_of(&self.terms, &probe, &cmp) {
            Some(first) => {
                let last = last_index_of(&self.terms, &probe, &cmp).unwrap_or(first);
                last - first + 1
            }
            None => 0,
        }
    }

    /// Number of terms in the structure.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the structure holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
