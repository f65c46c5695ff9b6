// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line record codec with CRC32 integrity checking
//!
//! Each record is rendered as one line of text:
//!
//! ```text
//! TIMESTAMP SIZE DATA CRC
//! ```
//!
//! - `TIMESTAMP` - RFC 3339 UTC instant with fractional seconds
//! - `SIZE` - payload length in bytes
//! - `DATA` - payload in URL-safe base64 (may be empty)
//! - `CRC` - CRC32 of everything before it, including the trailing space
//!
//! Decoding verifies the CRC before looking at any other field, so a
//! field error is only reported for an entry whose checksum was intact.

use crate::record::Record;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use std::num::ParseIntError;
use thiserror::Error;

/// URL-safe alphabet; padded on encode, and on decode whenever `=` appears.
const PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes data written without any padding.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Reasons a journal line failed to decode
///
/// Messages name the offending raw text and are stable enough to assert on.
#[derive(Debug, Error)]
pub enum CorruptionError {
    #[error("Invalid journal entry \"{line}\"")]
    InvalidEntry { line: String },

    #[error("Invalid crc: \"{crc}\"")]
    InvalidCrc {
        crc: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Bad CRC: computed {computed} but read {read}")]
    BadCrc { computed: u32, read: u64 },

    #[error("Invalid timestamp: \"{timestamp}\"")]
    InvalidTimestamp {
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid length: \"{length}\"")]
    InvalidLength {
        length: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Error parsing data: \"{data}\"")]
    InvalidData {
        data: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Data length mismatch: expected {expected} but found {actual}.")]
    DataLengthMismatch { expected: u64, actual: usize },
}

impl CorruptionError {
    /// Short stable name of the failure kind, for logs and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            CorruptionError::InvalidEntry { .. } => "invalid_entry",
            CorruptionError::InvalidCrc { .. } => "invalid_crc",
            CorruptionError::BadCrc { .. } => "bad_crc",
            CorruptionError::InvalidTimestamp { .. } => "invalid_timestamp",
            CorruptionError::InvalidLength { .. } => "invalid_length",
            CorruptionError::InvalidData { .. } => "invalid_data",
            CorruptionError::DataLengthMismatch { .. } => "data_length_mismatch",
        }
    }
}

/// Fractional-second digits written into record timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPrecision {
    #[default]
    Millis,
    Micros,
    Nanos,
}

impl TimestampPrecision {
    fn digits(self) -> u16 {
        match self {
            TimestampPrecision::Millis => 3,
            TimestampPrecision::Micros => 6,
            TimestampPrecision::Nanos => 9,
        }
    }

    fn format(self) -> SecondsFormat {
        match self {
            TimestampPrecision::Millis => SecondsFormat::Millis,
            TimestampPrecision::Micros => SecondsFormat::Micros,
            TimestampPrecision::Nanos => SecondsFormat::Nanos,
        }
    }
}

/// Encode a payload written at `timestamp` into a journal record
///
/// The timestamp is truncated to `precision` so the returned record
/// compares equal to what decoding its line produces.
pub fn encode(timestamp: DateTime<Utc>, payload: Vec<u8>, precision: TimestampPrecision) -> Record {
    let timestamp = timestamp.trunc_subsecs(precision.digits());
    let scope = format!(
        "{} {} {} ",
        timestamp.to_rfc3339_opts(precision.format(), true),
        payload.len(),
        PADDED.encode(&payload)
    );
    let line = format!("{}{}", scope, checksum(&scope));
    Record::from_parts(timestamp, payload, line)
}

/// Decode and validate a single journal line
pub fn decode(line: &str) -> Result<Record, CorruptionError> {
    let fields = Fields::tokenize(line).ok_or_else(|| CorruptionError::InvalidEntry {
        line: line.to_string(),
    })?;

    let read = fields
        .crc
        .parse::<u64>()
        .map_err(|source| CorruptionError::InvalidCrc {
            crc: fields.crc.to_string(),
            source,
        })?;
    let computed = checksum(fields.scope);
    if u64::from(computed) != read {
        return Err(CorruptionError::BadCrc { computed, read });
    }

    let timestamp = DateTime::parse_from_rfc3339(fields.timestamp)
        .map_err(|source| CorruptionError::InvalidTimestamp {
            timestamp: fields.timestamp.to_string(),
            source,
        })?
        .with_timezone(&Utc);

    let expected = fields
        .length
        .parse::<u64>()
        .map_err(|source| CorruptionError::InvalidLength {
            length: fields.length.to_string(),
            source,
        })?;

    // Padding is optional, but when present it must be complete
    let engine = if fields.data.contains('=') {
        &PADDED
    } else {
        &UNPADDED
    };
    let payload = engine
        .decode(fields.data)
        .map_err(|source| CorruptionError::InvalidData {
            data: fields.data.to_string(),
            source,
        })?;

    if payload.len() as u64 != expected {
        return Err(CorruptionError::DataLengthMismatch {
            expected,
            actual: payload.len(),
        });
    }

    Ok(Record::from_parts(timestamp, payload, line.to_string()))
}

/// CRC32 (IEEE) of the UTF-8 bytes of `scope`
pub fn checksum(scope: &str) -> u32 {
    crc32fast::hash(scope.as_bytes())
}

/// The raw fields of a line that matched the wire grammar
struct Fields<'a> {
    /// Everything before the CRC digits, trailing space included
    scope: &'a str,
    timestamp: &'a str,
    length: &'a str,
    data: &'a str,
    crc: &'a str,
}

impl<'a> Fields<'a> {
    /// Split on single spaces into exactly four fields and check each
    /// field's character class. `data` is the only field allowed to be empty.
    fn tokenize(line: &'a str) -> Option<Self> {
        let mut parts = line.split(' ');
        let timestamp = parts.next()?;
        let length = parts.next()?;
        let data = parts.next()?;
        let crc = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let matches = !timestamp.is_empty()
            && !timestamp.chars().any(is_whitespace)
            && is_digits(length)
            && data.bytes().all(is_data_byte)
            && is_digits(crc);
        if !matches {
            return None;
        }

        Some(Self {
            scope: &line[..line.len() - crc.len()],
            timestamp,
            length,
            data,
            crc,
        })
    }
}

fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn is_data_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'=')
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
