// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt matcher.
//!
//! Builds the longest-proper-prefix-suffix (failure) table for the pattern,
//! then scans the text in O(n + m) without ever moving the text cursor
//! backwards.

use super::{MatchError, Matcher, Scan};

/// Longest-proper-prefix-suffix table for `pattern`.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it, so `0 <= lps[i] <= i` and `lps[0] == 0`.
/// An empty pattern yields an empty table.
pub fn lps_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0usize; m];
    let mut len = 0; // length of the previous longest prefix-suffix
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back to the shorter prefix-suffix without consuming
            // pattern[i].
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Scan `text` for every occurrence of `pattern`, overlapping ones included.
pub fn scan(text: &[u8], pattern: &[u8]) -> Result<Scan, MatchError> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 {
        return Err(MatchError::EmptyPattern);
    }
    if m > n {
        return Ok(Scan::empty());
    }

    let lps = lps_table(pattern);
    let mut positions = Vec::new();
    let mut i = 0; // text cursor, never moves backwards
    let mut j = 0; // pattern cursor

    while i < n {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
        }
        if j == m {
            positions.push(i - j);
            // Resume as if the longest proper prefix-suffix of the pattern
            // had just been read, so overlapping occurrences are found.
            j = lps[j - 1];
        } else if i < n && pattern[j] != text[i] {
            if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }
    }

    Ok(Scan {
        positions,
        spurious_hits: 0,
    })
}

/// Occurrence positions only.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    Ok(scan(text, pattern)?.positions)
}

/// Matcher wrapper around [`scan`].
pub struct KmpMatcher;

impl Matcher for KmpMatcher {
    fn name(&self) -> &'static str {
        "kmp"
    }

    fn scan(&self, text: &[u8], pattern: &[u8]) -> Result<Scan, MatchError> {
        scan(text, pattern)
    }
}

#[cfg(test)]
#[path = "kmp_tests.rs"]
mod tests;
