//! Test helpers for behavioral specifications.
//!
//! Provides a high-level DSL for testing rummage CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub use assert_cmd::prelude::*;
pub use predicates;

/// Minimal valid config.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the rummage binary
pub fn rummage_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rummage"))
}

/// A temp project directory the CLI can run in.
///
/// Carries a `.git` marker so config discovery never walks out of the
/// temp directory into the developer's real tree.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write rummage.toml with the given content.
    pub fn config(&self, content: &str) {
        std::fs::write(self.dir.path().join("rummage.toml"), content).unwrap();
    }

    /// Write an arbitrary file, returning its absolute path.
    pub fn file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
