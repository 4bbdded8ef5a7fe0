// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and discovery (`rummage.toml`).
//!
//! Every setting has a default, so the file only overrides. Unknown keys
//! are errors: a typo that silently falls back to defaults would skew a
//! benchmark without anyone noticing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::matcher::RkParams;

/// Config schema version this build understands.
pub const CONFIG_VERSION: u32 = 1;

/// Centralized default values for the benchmark matrix.
///
/// Three pattern lengths against a 10k text, then three text lengths
/// against a 10-byte pattern.
pub mod defaults {
    /// Text length held fixed while the pattern length sweeps.
    pub const FIXED_TEXT_LEN: usize = 10_000;

    /// Pattern length held fixed while the text length sweeps.
    pub const FIXED_PATTERN_LEN: usize = 10;

    /// Timed samples per (cell, matcher) pair.
    pub const SAMPLES: u32 = 1;

    pub fn pattern_lengths() -> Vec<usize> {
        vec![10, 100, 1_000]
    }

    pub fn text_lengths() -> Vec<usize> {
        vec![10_000, 100_000, 1_000_000]
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config version {found} is newer than supported version {CONFIG_VERSION}")]
    Version { found: u32 },

    #[error("bench.{field} must not be empty")]
    EmptySweep { field: &'static str },

    #[error("bench.{field} entries must be at least 1")]
    ZeroPatternLen { field: &'static str },

    #[error("bench.samples must be at least 1")]
    ZeroSamples,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Schema version for forward compatibility.
    pub version: u32,

    /// Rolling-hash parameters for the Rabin-Karp matcher.
    pub rabin_karp: RkParams,

    /// Benchmark matrix settings.
    pub bench: BenchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            rabin_karp: RkParams::default(),
            bench: BenchConfig::default(),
        }
    }
}

/// Benchmark matrix configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Text length for the pattern sweep.
    pub fixed_text_len: usize,

    /// Pattern lengths swept against the fixed text.
    #[serde(default = "defaults::pattern_lengths")]
    pub pattern_lengths: Vec<usize>,

    /// Text lengths swept against the fixed pattern.
    #[serde(default = "defaults::text_lengths")]
    pub text_lengths: Vec<usize>,

    /// Pattern length for the text sweep.
    pub fixed_pattern_len: usize,

    /// Timed samples per (cell, matcher) pair; the mean is reported.
    pub samples: u32,

    /// Fixed input-generation seed. Unset means a fresh random seed per
    /// run, reported in the output.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            fixed_text_len: defaults::FIXED_TEXT_LEN,
            pattern_lengths: defaults::pattern_lengths(),
            text_lengths: defaults::text_lengths(),
            fixed_pattern_len: defaults::FIXED_PATTERN_LEN,
            samples: defaults::SAMPLES,
            seed: None,
        }
    }
}

/// Load and validate the config at `path`.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve the active config: explicit path, else discovery from `cwd`,
/// else defaults.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }
    match find_config(cwd) {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

/// Find rummage.toml starting from `start_dir` and walking up to the git
/// root. Directories above a `.git` belong to someone else's project.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join("rummage.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.version > CONFIG_VERSION {
        return Err(ConfigError::Version {
            found: config.version,
        });
    }
    if config.bench.pattern_lengths.is_empty() {
        return Err(ConfigError::EmptySweep {
            field: "pattern_lengths",
        });
    }
    if config.bench.text_lengths.is_empty() {
        return Err(ConfigError::EmptySweep {
            field: "text_lengths",
        });
    }
    if config.bench.pattern_lengths.iter().any(|&len| len == 0) {
        return Err(ConfigError::ZeroPatternLen {
            field: "pattern_lengths",
        });
    }
    if config.bench.fixed_pattern_len == 0 {
        return Err(ConfigError::ZeroPatternLen {
            field: "fixed_pattern_len",
        });
    }
    if config.bench.samples == 0 {
        return Err(ConfigError::ZeroSamples);
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
