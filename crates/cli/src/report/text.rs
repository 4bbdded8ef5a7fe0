// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use termcolor::WriteColor;

use crate::color::scheme;

use super::{BenchReport, ReportFormatter};

/// Human-readable report: one labelled line per (matcher, cell), grouped
/// under a heading per matcher.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(&self, out: &mut dyn WriteColor, report: &BenchReport) -> anyhow::Result<()> {
        writeln!(out, "Rummage Benchmark")?;
        writeln!(out, "=================")?;
        let date = report.generated.format("%Y-%m-%d %H:%M:%S UTC");
        writeln!(out, "Generated: {date}")?;
        writeln!(
            out,
            "seed: {}  samples: {}  rabin-karp: base {}, prime {}",
            report.seed,
            report.samples,
            report.params.base(),
            report.params.prime()
        )?;

        let mut current: Option<&str> = None;
        for record in &report.records {
            if current != Some(record.algorithm) {
                writeln!(out)?;
                out.set_color(&scheme::algorithm())?;
                write!(out, "{}", record.algorithm)?;
                out.reset()?;
                writeln!(out)?;
                current = Some(record.algorithm);
            }

            write!(
                out,
                "  text {} x pattern {}: ",
                record.text_len, record.pattern_len
            )?;
            out.set_color(&scheme::timing())?;
            write!(out, "{} us", record.micros)?;
            out.reset()?;
            if record.spurious_hits > 0 {
                writeln!(
                    out,
                    " ({} matches, {} spurious hits)",
                    record.matches, record.spurious_hits
                )?;
            } else {
                writeln!(out, " ({} matches)", record.matches)?;
            }
        }

        Ok(())
    }
}
