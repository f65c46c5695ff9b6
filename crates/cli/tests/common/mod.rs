// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three intact records around two damaged ones and a stray line.
/// Line 2 declares the wrong length and line 5 has its CRC off by one.
pub const DAMAGED_JOURNAL: &str = "\
2015-10-19T00:14:24.341Z 35 VHdvIHJvYWRzIGRpdmVyZ2VkIGluIGEgeWVsbG93IHdvb2Q= 925641221
2015-10-19T00:14:24.365Z 32 QW5kIHNvcnJ5IEkgY291bGQgbm90IHRyYXZlbCBib3Ro 2623152121
2015-10-19T00:14:24.366Z 33 QW5kIGJlIG9uZSB0cmF2ZWxlciwgbG9uZyBJIHN0b29k 8770967
2015-10-19T00:14:24.367Z 37 QW5kIGxvb2tlZCBkb3duIG9uZSBhcyBmYXIgYXMgSSBjb3VsZA== 1357003472
2015-10-19T00:14:24.367Z 36 VG8gd2hlcmUgaXQgYmVudCBpbiB0aGUgdW5kZXJncm93dGg7 3464495713
Not a journal entry at all!
";

/// Scratch directory holding journal files for one test
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name` and return its path
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write journal");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read journal")
    }

    /// A `tj` command running inside the scratch directory with default logging
    pub fn tj(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tj"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// Non-empty lines of a journal file
pub fn record_lines(contents: &str) -> Vec<&str> {
    contents.lines().filter(|line| !line.is_empty()).collect()
}
