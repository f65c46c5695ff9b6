// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Corruption-tolerant record stream
//!
//! The stream reads a journal file line by line. Blank lines are framing and
//! are skipped without decoding. A line that fails to decode is passed to
//! the optional sink and skipped, so one damaged record never hides the rest.
//! Skips are logged at `debug`, so the stream is quiet under a `warn` filter.

use crate::journal::JournalError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tj_core::{decode, CorruptionError, Record};

/// A corrupted line skipped while streaming
#[derive(Debug)]
pub struct JournalCorruption {
    /// 1-based line number in the journal file
    pub line: u64,
    pub error: CorruptionError,
}

impl fmt::Display for JournalCorruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Iterator over the valid records of a journal file, in file order
///
/// Owns its read handle; dropping the stream closes the file. An I/O error
/// is yielded once, after which the stream is exhausted.
pub struct RecordStream<F = fn(JournalCorruption)> {
    reader: Option<BufReader<File>>,
    buf: Vec<u8>,
    line_number: u64,
    sink: Option<F>,
}

impl RecordStream {
    /// Open a stream that silently skips corrupted lines
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        Ok(Self::from_file(File::open(path)?, None))
    }
}

impl<F: FnMut(JournalCorruption)> RecordStream<F> {
    /// Open a stream that reports each corrupted line to `sink`
    pub fn open_with(path: &Path, sink: F) -> Result<Self, JournalError> {
        Ok(Self::from_file(File::open(path)?, Some(sink)))
    }

    fn from_file(file: File, sink: Option<F>) -> Self {
        Self {
            reader: Some(BufReader::new(file)),
            buf: Vec::new(),
            line_number: 0,
            sink,
        }
    }

    fn report(&mut self, corruption: JournalCorruption) {
        tracing::debug!(
            line = corruption.line,
            kind = corruption.error.kind(),
            error = %corruption.error,
            "skipping corrupted journal entry"
        );
        if let Some(sink) = self.sink.as_mut() {
            sink(corruption);
        }
    }
}

impl<F: FnMut(JournalCorruption)> Iterator for RecordStream<F> {
    type Item = Result<Record, JournalError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let reader = self.reader.as_mut()?;
            self.buf.clear();

            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.reader = None;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;

                    let line = trim_line_ending(&self.buf);
                    if line.is_empty() {
                        continue;
                    }

                    let decoded = match std::str::from_utf8(line) {
                        Ok(text) => decode(text),
                        Err(_) => Err(CorruptionError::InvalidEntry {
                            line: String::from_utf8_lossy(line).into_owned(),
                        }),
                    };

                    match decoded {
                        Ok(record) => return Some(Ok(record)),
                        Err(error) => self.report(JournalCorruption {
                            line: self.line_number,
                            error,
                        }),
                    }
                }
                Err(e) => {
                    self.reader = None;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
