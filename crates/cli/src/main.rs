//! rummage binary entry point.

mod cmd_bench;
mod cmd_find;

use std::io::Write;

use clap::{CommandFactory, Parser};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use rummage::cli::{Cli, Command};
use rummage::color::scheme;
use rummage::error::ExitCode;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Find(args) => cmd_find::run(&cli, args),
        Command::Bench(args) => cmd_bench::run(&cli, args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "rummage", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    };

    match result {
        Ok(code) => std::process::exit(code.code()),
        Err(err) => {
            report_error(&err);
            std::process::exit(ExitCode::Failure.code());
        }
    }
}

/// `-v` forces debug-level diagnostics; otherwise `RUST_LOG` decides, with
/// warnings as the quiet default.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(err: &anyhow::Error) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(&scheme::fail());
    let _ = write!(stderr, "error:");
    let _ = stderr.set_color(&ColorSpec::new());
    let _ = writeln!(stderr, " {err:#}");
}
