// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use termcolor::WriteColor;

use super::{BenchReport, ReportFormatter};

/// Machine-readable report: the full [`BenchReport`] as pretty JSON.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, out: &mut dyn WriteColor, report: &BenchReport) -> anyhow::Result<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        Ok(())
    }
}
