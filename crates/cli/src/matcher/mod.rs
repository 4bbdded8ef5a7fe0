// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring matchers.
//!
//! Two production algorithms (Knuth-Morris-Pratt and Rabin-Karp) plus a
//! naive oracle used for cross-verification. Every matcher reports each
//! occurrence of the pattern, overlapping occurrences included, as 0-based
//! byte offsets in strictly increasing order.

pub mod kmp;
pub mod naive;
pub mod rabin_karp;

pub use kmp::KmpMatcher;
pub use naive::NaiveMatcher;
pub use rabin_karp::{RabinKarpMatcher, RkParams};

use thiserror::Error;

/// Input the matchers reject rather than guess about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An empty pattern has no meaningful occurrence set; callers must pass
    /// at least one byte.
    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// 0-based start offsets of every occurrence, strictly increasing.
    pub positions: Vec<usize>,
    /// Windows whose hash matched the pattern hash but whose bytes did not.
    /// Always 0 for matchers that do not hash.
    pub spurious_hits: u64,
}

impl Scan {
    pub(crate) fn empty() -> Self {
        Scan {
            positions: Vec::new(),
            spurious_hits: 0,
        }
    }
}

/// A single-pattern exact matcher.
///
/// Implementations are pure: no state survives a call, so one matcher value
/// can serve concurrent scans over independent inputs.
pub trait Matcher: Send + Sync {
    /// Short stable identifier used in reports and logs.
    fn name(&self) -> &'static str;

    /// Scan `text` for every occurrence of `pattern`.
    fn scan(&self, text: &[u8], pattern: &[u8]) -> Result<Scan, MatchError>;

    /// Occurrence positions only.
    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
        Ok(self.scan(text, pattern)?.positions)
    }
}

/// The matchers the benchmark compares, in report order.
pub fn benchmark_matchers(params: RkParams) -> Vec<Box<dyn Matcher>> {
    vec![
        Box::new(KmpMatcher),
        Box::new(RabinKarpMatcher::new(params)),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
