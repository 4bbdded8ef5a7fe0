// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized file reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for searching
#![allow(unsafe_code)]
//!
//! Texts under 64KB are read straight into memory; anything larger is
//! memory-mapped so `find` can search megabyte corpora without copying
//! them first.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Text to search, either owned or memory-mapped.
pub enum TextSource {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl TextSource {
    /// Read `path` using the size-appropriate strategy.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;

        if meta.len() < MMAP_THRESHOLD {
            Ok(TextSource::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the
            // mapped memory, and stale data on concurrent modification is
            // acceptable for searching.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(TextSource::Mapped(mmap))
        }
    }

    /// The bytes to search.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            TextSource::Owned(bytes) => bytes,
            TextSource::Mapped(mmap) => mmap,
        }
    }

    /// Byte length of the text.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True when the text has no bytes.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
