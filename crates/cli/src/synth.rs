// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synthetic input generation.
//!
//! The benchmark corpus is uniform random ASCII digits: a 10-symbol
//! alphabet keeps real matches occurring at benchmark lengths while still
//! exercising the matchers on arbitrary bytes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniformly random digit string (`'0'..='9'`) of exactly `len` bytes.
pub fn digit_string(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'0'..=b'9')).collect()
}

/// Deterministic generator for `seed`.
///
/// Every bench run reports its seed, so any run can be replayed exactly.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
