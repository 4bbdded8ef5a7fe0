// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Naive oracle matcher.
//!
//! Used to cross-check the real matchers in tests and in `--verify` runs.
//! memmem locates each candidate, and restarting one byte past the previous
//! start keeps overlapping occurrences.

use memchr::memmem;

use super::{MatchError, Matcher, Scan};

/// Scan `text` for every occurrence of `pattern`, overlapping ones included.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }

    let finder = memmem::Finder::new(pattern);
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(found) = finder.find(&text[from..]) {
        positions.push(from + found);
        from += found + 1;
    }
    Ok(positions)
}

/// Oracle matcher; excluded from the benchmarked set.
pub struct NaiveMatcher;

impl Matcher for NaiveMatcher {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn scan(&self, text: &[u8], pattern: &[u8]) -> Result<Scan, MatchError> {
        Ok(Scan {
            positions: find_all(text, pattern)?,
            spurious_hits: 0,
        })
    }
}

#[cfg(test)]
#[path = "naive_tests.rs"]
mod tests;
