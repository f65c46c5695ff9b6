// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single timestamped journal record

use crate::clock::Clock;
use crate::codec::{self, CorruptionError, TimestampPrecision};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One entry in the journal: a creation time and an opaque payload
///
/// A record also keeps the exact line it was encoded as. For records read
/// back from a journal this is the input line verbatim, never re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: DateTime<Utc>,
    payload: Vec<u8>,
    line: String,
}

impl Record {
    /// Encode `payload` as a new record stamped with the clock's current time
    pub fn new<C: Clock>(payload: Vec<u8>, clock: &C, precision: TimestampPrecision) -> Self {
        codec::encode(clock.now(), payload, precision)
    }

    /// Decode and validate a journal line
    pub fn parse(line: &str) -> Result<Self, CorruptionError> {
        codec::decode(line)
    }

    pub(crate) fn from_parts(timestamp: DateTime<Utc>, payload: Vec<u8>, line: String) -> Self {
        Self {
            timestamp,
            payload,
            line,
        }
    }

    /// The instant the record was written
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// The canonical single-line encoding, without framing newlines
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Read the payload as UTF-8 text
    ///
    /// Invalid sequences are replaced with U+FFFD.
    pub fn read_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl FromStr for Record {
    type Err = CorruptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
