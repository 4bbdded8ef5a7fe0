// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.
//!
//! `find` follows the grep convention: 0 means at least one match, 1 means
//! a clean run with no matches, 2 means the run itself failed.

/// Exit status for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Work completed; for `find`, at least one match.
    Success,
    /// `find` completed with zero matches.
    NoMatch,
    /// Invalid input, bad config, or I/O failure.
    Failure,
}

impl ExitCode {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::NoMatch => 1,
            ExitCode::Failure => 2,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
