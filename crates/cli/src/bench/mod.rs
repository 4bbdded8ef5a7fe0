// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark runner.
//!
//! Generates one (text, pattern) input per matrix cell, optionally
//! cross-checks every matcher against the naive oracle, then times each
//! matcher serially. Timing loops run one algorithm on one cell at a time
//! so measurements never contend; only the untimed verification pass fans
//! out across cells.

pub mod plan;

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::BenchConfig;
use crate::matcher::{MatchError, Matcher, naive};
use crate::synth;

pub use plan::{BenchCell, Series, cells};

/// Knobs for one bench run.
#[derive(Debug, Clone, Copy)]
pub struct BenchOptions {
    /// Input-generation seed.
    pub seed: u64,
    /// Timed samples per (cell, matcher) pair; the mean is recorded.
    pub samples: u32,
    /// Cross-check matchers against the oracle before timing.
    pub verify: bool,
}

/// Timing for one (cell, matcher) pair.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRecord {
    pub series: Series,
    pub text_len: usize,
    pub pattern_len: usize,
    pub algorithm: &'static str,
    /// Mean wall-clock time per scan, in microseconds.
    pub micros: u64,
    pub samples: u32,
    pub matches: usize,
    pub spurious_hits: u64,
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(
        "{algorithm} disagrees with the oracle on text {text_len} x pattern {pattern_len}: \
         {found} vs {expected} matches"
    )]
    Disagreement {
        algorithm: &'static str,
        text_len: usize,
        pattern_len: usize,
        found: usize,
        expected: usize,
    },
}

/// Run the full matrix: generate, optionally verify, then time.
///
/// Records come back grouped by matcher in registration order, cells in
/// matrix order within each group.
pub fn run(
    config: &BenchConfig,
    matchers: &[Box<dyn Matcher>],
    opts: &BenchOptions,
) -> Result<Vec<BenchRecord>, BenchError> {
    let samples = opts.samples.max(1);
    let inputs = generate_inputs(config, opts.seed);

    if opts.verify {
        verify(&inputs, matchers)?;
    }

    let mut records = Vec::with_capacity(inputs.len() * matchers.len());
    for matcher in matchers {
        for input in &inputs {
            records.push(time_cell(matcher.as_ref(), input, samples)?);
        }
    }
    Ok(records)
}

/// One generated matrix cell.
struct CellInput {
    cell: BenchCell,
    text: Vec<u8>,
    pattern: Vec<u8>,
}

/// Generate the per-cell inputs.
///
/// Each cell draws from its own derived stream, so the corpus for a given
/// seed is stable regardless of cell count or iteration order.
fn generate_inputs(config: &BenchConfig, seed: u64) -> Vec<CellInput> {
    cells(config)
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let mut rng = synth::seeded_rng(seed.wrapping_add(idx as u64));
            let text = synth::digit_string(&mut rng, cell.text_len);
            let pattern = synth::digit_string(&mut rng, cell.pattern_len);
            CellInput {
                cell,
                text,
                pattern,
            }
        })
        .collect()
}

/// Cross-check every matcher against the naive oracle on every cell.
fn verify(inputs: &[CellInput], matchers: &[Box<dyn Matcher>]) -> Result<(), BenchError> {
    inputs.par_iter().try_for_each(|input| {
        let expected = naive::find_all(&input.text, &input.pattern)?;
        for matcher in matchers {
            let found = matcher.find_all(&input.text, &input.pattern)?;
            if found != expected {
                return Err(BenchError::Disagreement {
                    algorithm: matcher.name(),
                    text_len: input.cell.text_len,
                    pattern_len: input.cell.pattern_len,
                    found: found.len(),
                    expected: expected.len(),
                });
            }
        }
        Ok(())
    })
}

/// Time one matcher on one cell; timing covers the scan only.
fn time_cell(
    matcher: &dyn Matcher,
    input: &CellInput,
    samples: u32,
) -> Result<BenchRecord, BenchError> {
    let mut total = Duration::ZERO;
    let mut last = None;
    for _ in 0..samples {
        let start = Instant::now();
        let scan = matcher.scan(&input.text, &input.pattern)?;
        total += start.elapsed();
        last = Some(scan);
    }
    let scan = last.unwrap_or_else(crate::matcher::Scan::empty);
    let mean = total / samples;

    tracing::debug!(
        "{}: text {} x pattern {} took {:?} over {} sample(s)",
        matcher.name(),
        input.cell.text_len,
        input.cell.pattern_len,
        mean,
        samples
    );

    Ok(BenchRecord {
        series: input.cell.series,
        text_len: input.cell.text_len,
        pattern_len: input.cell.pattern_len,
        algorithm: matcher.name(),
        micros: mean.as_micros() as u64,
        samples,
        matches: scan.positions.len(),
        spurious_hits: scan.spurious_hits,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
