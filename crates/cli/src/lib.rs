// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring search (Knuth-Morris-Pratt and Rabin-Karp) with a
//! latency benchmark harness over synthetic digit strings.
//!
//! [`matcher`] holds the algorithms behind a common [`matcher::Matcher`]
//! trait; every matcher reports overlapping occurrences as 0-based byte
//! offsets. [`bench`] times the matchers across a configurable matrix of
//! text/pattern lengths and [`report`] renders the results.

pub mod bench;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod file_reader;
pub mod matcher;
pub mod report;
pub mod synth;

#[cfg(test)]
pub mod test_utils;
