// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark report rendering.
//!
//! A [`ReportFormatter`] renders one [`BenchReport`]; [`render_to`]
//! dispatches on the requested output format. Formatters write through
//! `termcolor` so color flows to terminals and disappears in pipes.

mod json;
mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;
use termcolor::{Buffer, WriteColor};

use crate::bench::BenchRecord;
use crate::cli::OutputFormat;
use crate::matcher::RkParams;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Report schema version, bumped when the JSON shape changes.
pub const REPORT_VERSION: u32 = 1;

/// Everything a formatter needs to render one bench run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub version: u32,
    pub generated: DateTime<Utc>,
    /// Input-generation seed; rerunning with it reproduces the corpus.
    pub seed: u64,
    pub samples: u32,
    pub params: RkParams,
    pub records: Vec<BenchRecord>,
}

/// Trait for rendering a bench report into an output format.
pub trait ReportFormatter {
    /// Render `report` to `out`.
    fn format_to(&self, out: &mut dyn WriteColor, report: &BenchReport) -> anyhow::Result<()>;
}

/// Render `report` to `out` in the requested format.
pub fn render_to(
    out: &mut dyn WriteColor,
    format: OutputFormat,
    report: &BenchReport,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format_to(out, report)
}

/// Render without color into a `String`.
pub fn render_plain(format: OutputFormat, report: &BenchReport) -> anyhow::Result<String> {
    let mut buffer = Buffer::no_color();
    render_to(&mut buffer, format, report)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
