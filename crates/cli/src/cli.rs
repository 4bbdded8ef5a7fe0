//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use anstyle::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// cargo-style help colors.
const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().bold())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::Cyan.on_default().bold())
    .placeholder(AnsiColor::Cyan.on_default());

/// Exact substring search with a latency benchmark harness
#[derive(Parser)]
#[command(name = "rummage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = HELP_STYLES)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RUMMAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find every occurrence of a pattern in a text
    Find(FindArgs),
    /// Time the matchers across the benchmark matrix
    Bench(BenchArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Text to search; omit to read --file or stdin
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Matching algorithm
    #[arg(long, default_value = "kmp", value_name = "ALGO")]
    pub algorithm: Algorithm,

    /// Run every matcher and fail unless they all agree
    #[arg(long)]
    pub verify: bool,

    /// Print only the number of matches
    #[arg(long)]
    pub count: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct BenchArgs {
    /// Timed samples per matrix cell (mean is reported)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: Option<u32>,

    /// Input-generation seed (default: random, always reported)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Cross-check the matchers against a naive oracle before timing
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Kmp,
    RabinKarp,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
