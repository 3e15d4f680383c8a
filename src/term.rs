// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The autocomplete term and its ordering family.
//!
//! A [`Term`] is an immutable `(text, weight)` pair. It supports three
//! orderings, and everything else in the crate is built on them:
//!
//! | Ordering                  | Defined by                               | Used for              |
//! |---------------------------|------------------------------------------|-----------------------|
//! | natural (`Ord`)           | lexicographic by `text`                  | the one-time sort     |
//! | [`by_reverse_weight_order`] | descending by `weight`                 | ranking query results |
//! | [`by_prefix_order`]       | lexicographic by the first `r` chars     | locating the match run|
//!
//! # Invariants
//!
//! - A term never changes after construction. Equality and ordering are
//!   derived from the two fields alone.
//! - `weight` is a `u64`: a negative weight is unrepresentable here, so the
//!   check the query path would otherwise need lives at the input boundary
//!   (see [`crate::loader`]).
//!
//! # Unicode
//!
//! Prefix truncation counts **characters**, not bytes. `by_prefix_order(3)`
//! compares `"héllo"` by its first three chars `h`, `é`, `l`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An immutable weighted autocomplete term.
///
/// Natural order is lexicographic by text (weight breaks ties so that
/// ordering stays consistent with structural equality).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term {
    text: String,
    weight: u64,
}

impl Term {
    /// Create a term from its text and weight. Empty text is allowed.
    pub fn new(text: impl Into<String>, weight: u64) -> Self {
        Term {
            text: text.into(),
            weight,
        }
    }

    /// The term's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The term's weight (popularity count, ranking signal, ...).
    pub fn weight(&self) -> u64 {
        self.weight
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.text)
    }
}

/// Comparator ordering terms by weight, heaviest first.
///
/// Ties are left to the caller's sort; with a stable sort, equal-weight
/// terms keep their input order, but that is not part of the contract.
pub fn by_reverse_weight_order() -> impl Fn(&Term, &Term) -> Ordering {
    |a, b| b.weight.cmp(&a.weight)
}

/// Comparator ordering terms lexicographically by the first `r` characters
/// of their text.
///
/// Each side is truncated to `min(r, char_count)` characters before
/// comparing, so a term shorter than `r` competes with its whole text.
/// Two terms compare equal exactly when their truncations are identical,
/// which is the matching criterion the query path relies on: a probe term
/// built from a prefix `p` and `r = p.chars().count()` is equal, under this
/// comparator, to precisely the terms whose text starts with `p` (or whose
/// whole text is a prefix of `p` of the same truncated length).
///
/// With `r == 0` every pair of terms compares equal.
pub fn by_prefix_order(r: usize) -> impl Fn(&Term, &Term) -> Ordering {
    move |a, b| a.text.chars().take(r).cmp(b.text.chars().take(r))
}
