// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use chrono::SecondsFormat;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use tj_storage::Record;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A record as shown to the user
#[derive(Debug, Serialize)]
pub struct RecordView {
    pub timestamp: String,
    pub size: usize,
    pub text: String,
    #[serde(skip)]
    show_timestamp: bool,
}

impl RecordView {
    pub fn new(record: &Record, show_timestamp: bool) -> Self {
        Self {
            timestamp: record
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            size: record.len(),
            text: record.read_string().into_owned(),
            show_timestamp,
        }
    }
}

impl fmt::Display for RecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_timestamp {
            write!(f, "{} {}", self.timestamp, self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// Write one item per line in the specified format
pub fn write_line<W, T>(out: &mut W, value: &T, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => {
            let json = serde_json::to_string(value).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
