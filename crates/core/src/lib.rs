// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tj-core: record codec for tinyjournal
//!
//! This crate provides:
//! - The single-line, CRC-protected record format
//! - Layered decoding with a distinct error for every failure stage
//! - A clock abstraction so record timestamps can be pinned in tests

pub mod clock;
pub mod codec;
pub mod record;

pub use clock::{Clock, FakeClock, SystemClock};
pub use codec::{checksum, decode, encode, CorruptionError, TimestampPrecision};
pub use record::Record;
