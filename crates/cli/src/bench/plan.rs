// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark matrix construction.
//!
//! The matrix has two series: pattern lengths swept against a fixed text,
//! then text lengths swept against a fixed pattern.

use serde::Serialize;

use crate::config::BenchConfig;

/// Which sweep a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Series {
    /// Pattern length varies at a fixed text length.
    PatternSweep,
    /// Text length varies at a fixed pattern length.
    TextSweep,
}

/// One (text length, pattern length) point of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchCell {
    pub series: Series,
    pub text_len: usize,
    pub pattern_len: usize,
}

/// The ordered matrix: the pattern sweep first, then the text sweep.
pub fn cells(config: &BenchConfig) -> Vec<BenchCell> {
    let mut cells =
        Vec::with_capacity(config.pattern_lengths.len() + config.text_lengths.len());
    for &pattern_len in &config.pattern_lengths {
        cells.push(BenchCell {
            series: Series::PatternSweep,
            text_len: config.fixed_text_len,
            pattern_len,
        });
    }
    for &text_len in &config.text_lengths {
        cells.push(BenchCell {
            series: Series::TextSweep,
            text_len,
            pattern_len: config.fixed_pattern_len,
        });
    }
    cells
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
