// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal configuration

use tj_core::TimestampPrecision;

/// Configuration for a [`Journal`](crate::Journal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// fsync the file after every append
    pub sync: bool,
    /// Fractional-second digits written into record timestamps
    pub precision: TimestampPrecision,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            sync: true,
            precision: TimestampPrecision::Millis,
        }
    }
}

impl JournalConfig {
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn with_precision(mut self, precision: TimestampPrecision) -> Self {
        self.precision = precision;
        self
    }
}
