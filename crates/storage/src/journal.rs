// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only journal file
//!
//! Every record is written as `"\n" + line + "\n"` in a single append.
//! Record lines never contain a newline, so splitting the file on newlines
//! always recovers record boundaries, whatever surrounds them.

use crate::config::JournalConfig;
use crate::stream::{JournalCorruption, RecordStream};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tj_core::{Clock, Record, SystemClock};

/// Errors that can occur in journal operations
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("journal has been closed")]
    Closed,
}

/// Write side lifecycle. Tracked here rather than inferred from the file
/// handle; once closed, a journal never reopens.
#[derive(Debug)]
enum State {
    Open(File),
    Closed,
}

/// Append-only journal of timestamped records
#[derive(Debug)]
pub struct Journal<C: Clock = SystemClock> {
    path: PathBuf,
    state: State,
    config: JournalConfig,
    clock: C,
}

impl Journal {
    /// Open or create a journal with the default configuration
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        Self::open_with(path, JournalConfig::default())
    }

    /// Open or create a journal
    pub fn open_with(path: impl AsRef<Path>, config: JournalConfig) -> Result<Self, JournalError> {
        Self::with_clock(path, config, SystemClock)
    }
}

impl<C: Clock> Journal<C> {
    /// Open or create a journal that stamps records using `clock`
    pub fn with_clock(
        path: impl AsRef<Path>,
        config: JournalConfig,
        clock: C,
    ) -> Result<Self, JournalError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), sync = config.sync, "journal opened");

        Ok(Self {
            path,
            state: State::Open(file),
            config,
            clock,
        })
    }

    /// Append a record containing `payload`
    ///
    /// The record is visible to new streams when this returns, and on disk
    /// as well if `sync` is configured. Fails with [`JournalError::Closed`]
    /// without touching the file once the journal is closed.
    pub fn write(&mut self, payload: impl Into<Vec<u8>>) -> Result<(), JournalError> {
        let State::Open(file) = &mut self.state else {
            tracing::warn!(path = %self.path.display(), "write rejected: journal is closed");
            return Err(JournalError::Closed);
        };

        let record = Record::new(payload.into(), &self.clock, self.config.precision);
        let mut framed = String::with_capacity(record.line().len() + 2);
        framed.push('\n');
        framed.push_str(record.line());
        framed.push('\n');

        file.write_all(framed.as_bytes())?;
        file.flush()?;
        if self.config.sync {
            file.sync_all()?;
        }

        tracing::trace!(bytes = record.len(), "record appended");
        Ok(())
    }

    /// Append `text` as UTF-8; read it back with [`Record::read_string`]
    pub fn write_text(&mut self, text: &str) -> Result<(), JournalError> {
        self.write(text.as_bytes())
    }

    /// Close the write side. Idempotent.
    ///
    /// Streams keep working after close.
    pub fn close(&mut self) {
        if let State::Open(file) = std::mem::replace(&mut self.state, State::Closed) {
            drop(file);
            tracing::info!(path = %self.path.display(), "journal closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Stream the journal's current records, silently skipping corrupted lines
    pub fn stream(&self) -> Result<RecordStream, JournalError> {
        RecordStream::open(&self.path)
    }

    /// Stream the journal's current records, passing each corrupted line to `sink`
    pub fn stream_with<F>(&self, sink: F) -> Result<RecordStream<F>, JournalError>
    where
        F: FnMut(JournalCorruption),
    {
        RecordStream::open_with(&self.path, sink)
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
