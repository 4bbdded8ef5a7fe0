// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rummage find` command implementation.
//!
//! Resolves the text (inline argument, file, or stdin), runs the selected
//! matcher, and prints occurrence positions. Exit codes follow grep: 0 for
//! at least one match, 1 for none, 2 for failure.

use std::io::{Read, Write};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;

use rummage::cli::{Algorithm, Cli, FindArgs, OutputFormat};
use rummage::config::{self, Config};
use rummage::error::ExitCode;
use rummage::file_reader::TextSource;
use rummage::matcher::{self, KmpMatcher, Matcher, RabinKarpMatcher};

/// JSON shape for one find run.
#[derive(Serialize)]
struct FindReport<'a> {
    algorithm: &'a str,
    text_len: usize,
    pattern_len: usize,
    count: usize,
    positions: &'a [usize],
}

/// Run the `rummage find` command.
pub fn run(cli: &Cli, args: &FindArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_or_default(cli.config.as_deref(), &cwd)?;

    let pattern = args.pattern.as_bytes();
    let source = resolve_text(args)?;
    let text = source.as_bytes();

    let matcher = select_matcher(args.algorithm, &config);
    let start = Instant::now();
    let positions = matcher
        .find_all(text, pattern)
        .context("matching failed")?;
    tracing::debug!(
        "{} searched {} bytes in {:?}",
        matcher.name(),
        text.len(),
        start.elapsed()
    );

    if args.verify {
        verify_agreement(text, pattern, &positions, &config)?;
    }

    print_result(args, matcher.name(), text.len(), pattern.len(), &positions)?;

    if positions.is_empty() {
        Ok(ExitCode::NoMatch)
    } else {
        Ok(ExitCode::Success)
    }
}

/// The text to search, owned or mapped.
enum ResolvedText {
    Inline(Vec<u8>),
    File(TextSource),
}

impl ResolvedText {
    fn as_bytes(&self) -> &[u8] {
        match self {
            ResolvedText::Inline(bytes) => bytes,
            ResolvedText::File(source) => source.as_bytes(),
        }
    }
}

fn resolve_text(args: &FindArgs) -> anyhow::Result<ResolvedText> {
    if let Some(ref text) = args.text {
        return Ok(ResolvedText::Inline(text.clone().into_bytes()));
    }
    if let Some(ref path) = args.file {
        let source = TextSource::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(ResolvedText::File(source));
    }
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("failed to read text from stdin")?;
    Ok(ResolvedText::Inline(buffer))
}

fn select_matcher(algorithm: Algorithm, config: &Config) -> Box<dyn Matcher> {
    match algorithm {
        Algorithm::Kmp => Box::new(KmpMatcher),
        Algorithm::RabinKarp => Box::new(RabinKarpMatcher::new(config.rabin_karp)),
    }
}

/// `--verify`: run every matcher plus the oracle; any disagreement is a
/// bug worth failing loud on.
fn verify_agreement(
    text: &[u8],
    pattern: &[u8],
    positions: &[usize],
    config: &Config,
) -> anyhow::Result<()> {
    let expected = matcher::naive::find_all(text, pattern)?;
    anyhow::ensure!(
        positions == expected.as_slice(),
        "selected matcher disagrees with the oracle: {} vs {} matches",
        positions.len(),
        expected.len()
    );
    for m in matcher::benchmark_matchers(config.rabin_karp) {
        let found = m.find_all(text, pattern)?;
        anyhow::ensure!(
            found == expected,
            "{} disagrees with the oracle: {} vs {} matches",
            m.name(),
            found.len(),
            expected.len()
        );
    }
    Ok(())
}

fn print_result(
    args: &FindArgs,
    algorithm: &str,
    text_len: usize,
    pattern_len: usize,
    positions: &[usize],
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Json => {
            let report = FindReport {
                algorithm,
                text_len,
                pattern_len,
                count: positions.len(),
                positions,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        }
        OutputFormat::Text if args.count => {
            writeln!(out, "{}", positions.len())?;
        }
        OutputFormat::Text => {
            for pos in positions {
                writeln!(out, "{pos}")?;
            }
        }
    }
    Ok(())
}
