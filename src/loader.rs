// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term list parsing - the boundary where bad input is rejected.
//!
//! Two formats are supported:
//!
//! - **Text**: one `<weight><whitespace><text>` pair per line, the classic
//!   weighted-wordlist layout. An optional first line holding just the term
//!   count is accepted and used only to size the allocation. Blank lines are
//!   skipped.
//! - **JSON**: an array of `{"text": ..., "weight": ...}` objects.
//!
//! The core types make a negative weight unrepresentable (`u64`), so this
//! module is where a negative or malformed weight in the input turns into a
//! typed error, before any structure is built. Construction is all-or-
//! nothing: one bad line fails the whole load.

use crate::term::Term;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error produced while loading a term list.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// A line's weight token was missing, negative, or not an integer.
    InvalidWeight { line: usize, token: String },
    /// A line had a weight but no text field.
    MissingText { line: usize },
    /// The JSON payload did not deserialize.
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read term file: {}", e),
            LoadError::InvalidWeight { line, token } => {
                write!(f, "line {}: invalid weight '{}'", line, token)
            }
            LoadError::MissingText { line } => {
                write!(f, "line {}: weight without a term", line)
            }
            LoadError::Json(e) => write!(f, "invalid JSON term payload: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// Parse the text format. Line numbers in errors are 1-based.
pub fn parse_terms(input: &str) -> Result<Vec<Term>, LoadError> {
    let mut terms: Vec<Term> = Vec::new();
    let mut seen_data_line = false;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, Some(rest.trim_start())),
            None => (line, None),
        };

        if rest.is_none() {
            // A lone integer before any data line is the count header.
            if !seen_data_line {
                if let Ok(count) = token.parse::<usize>() {
                    terms.reserve(count);
                    seen_data_line = true;
                    continue;
                }
            }
            return Err(LoadError::MissingText { line: line_no });
        }

        let weight: u64 = token.parse().map_err(|_| LoadError::InvalidWeight {
            line: line_no,
            token: token.to_string(),
        })?;

        terms.push(Term::new(rest.unwrap_or(""), weight));
        seen_data_line = true;
    }

    Ok(terms)
}

/// Parse the JSON format: an array of `{"text", "weight"}` objects.
///
/// serde rejects a negative or fractional weight during deserialization
/// (`weight` is `u64`), so no second validation pass is needed.
pub fn parse_terms_json(input: &str) -> Result<Vec<Term>, LoadError> {
    Ok(serde_json::from_str(input)?)
}

/// Read and parse a term file, picking the parser by `json`.
pub fn load_terms(path: &Path, json: bool) -> Result<Vec<Term>, LoadError> {
    let contents = fs::read_to_string(path)?;
    if json {
        parse_terms_json(&contents)
    } else {
        parse_terms(&contents)
    }
}
