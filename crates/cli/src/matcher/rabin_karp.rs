// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rabin-Karp matcher.
//!
//! Keeps a rolling polynomial hash of the current text window and compares
//! it against the pattern hash. Windows that hash equal are verified
//! byte-for-byte, so parameter choice affects speed (collision rate) but
//! never correctness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MatchError, Matcher, Scan};

/// Largest allowed `base`/`prime`. With both below 2^31 every intermediate
/// product in the scan stays under 2^62, comfortably inside `i64`.
pub const MAX_PARAM: u64 = (1 << 31) - 1;

/// Rolling-hash parameters, bounds-checked at construction.
///
/// Defaults are sized for real use (byte alphabet, large prime). The
/// classroom constants `base 10 / prime 13` are a valid configuration:
/// collisions become frequent but verification filters every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct RkParams {
    base: i64,
    prime: i64,
}

/// Unvalidated mirror of [`RkParams`] for deserialization.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawParams {
    base: u64,
    prime: u64,
}

impl Default for RawParams {
    fn default() -> Self {
        RawParams {
            base: 256,
            prime: 1_000_000_007,
        }
    }
}

impl TryFrom<RawParams> for RkParams {
    type Error = ParamError;

    fn try_from(raw: RawParams) -> Result<Self, ParamError> {
        RkParams::new(raw.base, raw.prime)
    }
}

/// Parameter outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rabin_karp.{name} must be in 2..={MAX_PARAM}, got {value}")]
pub struct ParamError {
    name: &'static str,
    value: u64,
}

impl RkParams {
    /// Build a parameter set, rejecting values outside `2..=MAX_PARAM`.
    pub fn new(base: u64, prime: u64) -> Result<Self, ParamError> {
        if !(2..=MAX_PARAM).contains(&base) {
            return Err(ParamError {
                name: "base",
                value: base,
            });
        }
        if !(2..=MAX_PARAM).contains(&prime) {
            return Err(ParamError {
                name: "prime",
                value: prime,
            });
        }
        Ok(RkParams {
            base: base as i64,
            prime: prime as i64,
        })
    }

    pub fn base(&self) -> u64 {
        self.base as u64
    }

    pub fn prime(&self) -> u64 {
        self.prime as u64
    }
}

impl Default for RkParams {
    fn default() -> Self {
        RkParams {
            base: 256,
            prime: 1_000_000_007,
        }
    }
}

/// Scan `text` for every occurrence of `pattern`, overlapping ones included.
pub fn scan(text: &[u8], pattern: &[u8], params: &RkParams) -> Result<Scan, MatchError> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 {
        return Err(MatchError::EmptyPattern);
    }
    if m > n {
        return Ok(Scan::empty());
    }

    let base = params.base;
    let prime = params.prime;

    // base^(m-1) mod prime: the weight of a window's leading byte.
    let mut lead_weight: i64 = 1;
    for _ in 0..m - 1 {
        lead_weight = (lead_weight * base) % prime;
    }

    let pattern_hash = horner(pattern, base, prime);
    let mut window_hash = horner(&text[..m], base, prime);

    let mut positions = Vec::new();
    let mut spurious_hits = 0u64;

    for i in 0..=n - m {
        if window_hash == pattern_hash {
            // Hash equality is necessary, never sufficient: confirm the
            // window before reporting it.
            if &text[i..i + m] == pattern {
                positions.push(i);
            } else {
                spurious_hits += 1;
            }
        }
        if i < n - m {
            window_hash = roll(window_hash, text[i], text[i + m], lead_weight, base, prime);
        }
    }

    if spurious_hits > 0 {
        tracing::trace!(
            "verification filtered {} spurious hits (prime {})",
            spurious_hits,
            params.prime
        );
    }

    Ok(Scan {
        positions,
        spurious_hits,
    })
}

/// Occurrence positions only.
pub fn find_all(text: &[u8], pattern: &[u8], params: &RkParams) -> Result<Vec<usize>, MatchError> {
    Ok(scan(text, pattern, params)?.positions)
}

/// Polynomial hash of `window` by Horner's method, canonical in `[0, prime)`.
fn horner(window: &[u8], base: i64, prime: i64) -> i64 {
    let mut hash = 0i64;
    for &byte in window {
        hash = (hash * base + i64::from(byte)) % prime;
    }
    hash
}

/// Slide the window one byte to the right: drop `leaving`, admit `entering`.
///
/// The subtraction can leave a negative intermediate, and `%` on a negative
/// `i64` keeps the sign, so the result is renormalized into `[0, prime)`.
fn roll(hash: i64, leaving: u8, entering: u8, lead_weight: i64, base: i64, prime: i64) -> i64 {
    let lead = (i64::from(leaving) * lead_weight) % prime;
    let mut next = (base * (hash - lead) + i64::from(entering)) % prime;
    if next < 0 {
        next += prime;
    }
    next
}

/// Matcher wrapper holding a parameter set.
pub struct RabinKarpMatcher {
    params: RkParams,
}

impl RabinKarpMatcher {
    pub fn new(params: RkParams) -> Self {
        RabinKarpMatcher { params }
    }

    pub fn params(&self) -> RkParams {
        self.params
    }
}

impl Default for RabinKarpMatcher {
    fn default() -> Self {
        RabinKarpMatcher::new(RkParams::default())
    }
}

impl Matcher for RabinKarpMatcher {
    fn name(&self) -> &'static str {
        "rabin-karp"
    }

    fn scan(&self, text: &[u8], pattern: &[u8]) -> Result<Scan, MatchError> {
        scan(text, pattern, &self.params)
    }
}

#[cfg(test)]
#[path = "rabin_karp_tests.rs"]
mod tests;
