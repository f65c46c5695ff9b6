// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tj-storage: append-only journal files
//!
//! ## Architecture
//!
//! ```text
//! payload → Record (tj-core) → Journal::write → "\n<line>\n" appended to file
//!                                                         ↓
//!                        RecordStream ← lines ← Journal::stream / RecordStream::open
//!                              ↓
//!                  Ok(Record) | sink(JournalCorruption)
//! ```
//!
//! ## Guarantees
//!
//! - Each record is appended with a single write and flushed before returning
//! - Writes after `close` fail without touching the file
//! - A corrupted line is reported and skipped; the stream carries on

pub mod config;
pub mod journal;
pub mod stream;

pub use config::JournalConfig;
pub use journal::{Journal, JournalError};
pub use stream::{JournalCorruption, RecordStream};
pub use tj_core::{Record, TimestampPrecision};
