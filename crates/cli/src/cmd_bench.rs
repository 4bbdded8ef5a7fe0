// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rummage bench` command implementation.
//!
//! Runs the configured matrix: a sweep of pattern lengths against a fixed
//! text, then a sweep of text lengths against a fixed pattern, each cell
//! timed per matcher on freshly generated digit strings.

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use termcolor::{ColorSpec, StandardStream, WriteColor};

use rummage::bench::{self, BenchOptions};
use rummage::cli::{BenchArgs, Cli, OutputFormat};
use rummage::color::{resolve_color, scheme};
use rummage::config;
use rummage::error::ExitCode;
use rummage::matcher;
use rummage::report::{self, BenchReport, REPORT_VERSION};

/// Run the `rummage bench` command.
pub fn run(cli: &Cli, args: &BenchArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_or_default(cli.config.as_deref(), &cwd)?;

    let samples = args.samples.unwrap_or(config.bench.samples);
    let seed = args.seed.or(config.bench.seed).unwrap_or_else(rand::random);

    let matchers = matcher::benchmark_matchers(config.rabin_karp);
    let opts = BenchOptions {
        seed,
        samples,
        verify: args.verify,
    };

    tracing::debug!("running benchmark matrix with seed {seed}");
    let records = bench::run(&config.bench, &matchers, &opts).context("benchmark failed")?;

    if args.verify && matches!(args.output, OutputFormat::Text) {
        print_verified(args, matchers.len(), records.len());
    }

    let bench_report = BenchReport {
        version: REPORT_VERSION,
        generated: Utc::now(),
        seed,
        samples,
        params: config.rabin_karp,
        records,
    };

    let choice = resolve_color(args.color, args.no_color);
    let mut stdout = StandardStream::stdout(choice);
    report::render_to(&mut stdout, args.output, &bench_report)?;

    Ok(ExitCode::Success)
}

/// Verification passed; say so before the report so a red failure and a
/// green pass land in the same place.
fn print_verified(args: &BenchArgs, matchers: usize, records: usize) {
    let cells = if matchers > 0 { records / matchers } else { 0 };
    let choice = resolve_color(args.color, args.no_color);
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(&scheme::pass());
    let _ = write!(stdout, "ok");
    let _ = stdout.set_color(&ColorSpec::new());
    let _ = writeln!(
        stdout,
        ": {matchers} matchers agree with the oracle on {cells} cells"
    );
    let _ = writeln!(stdout);
}
