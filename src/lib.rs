//! Weighted prefix autocomplete backed by range binary search.
//!
//! This crate answers "what are the most popular terms starting with what
//! the user typed so far?" over a fixed, in-memory term list. Terms are
//! sorted lexicographically once at construction; each query is two binary
//! searches (the boundaries of the prefix-matching run) plus a re-rank of
//! the usually-small match set by descending weight.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │   term.rs   │────▶│  search.rs   │────▶│ autocomplete.rs │
//! │ (Term, the  │     │ (first/last  │     │ (Autocomplete,  │
//! │  orderings) │     │  _index_of)  │     │  all_matches)   │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!        ▲
//!        │
//! ┌─────────────┐
//! │  loader.rs  │  (term files / JSON payloads → Vec<Term>)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typeahead::{Autocomplete, Term};
//!
//! let ac = Autocomplete::new(vec![
//!     Term::new("dog", 3),
//!     Term::new("do", 5),
//!     Term::new("dorm", 1),
//!     Term::new("cat", 9),
//! ]);
//!
//! let matches = ac.all_matches("do");
//! assert_eq!(matches[0].text(), "do"); // heaviest first
//! ```
//!
//! # Concurrency
//!
//! An [`Autocomplete`] is read-only after construction and queries allocate
//! their own results, so sharing one behind an `Arc` across reader threads
//! needs no locking.

pub mod autocomplete;
pub mod loader;
pub mod search;
pub mod term;

// Re-exports for public API
pub use autocomplete::Autocomplete;
pub use loader::{load_terms, parse_terms, parse_terms_json, LoadError};
pub use search::{first_index_of, last_index_of};
pub use term::{by_prefix_order, by_reverse_weight_order, Term};
