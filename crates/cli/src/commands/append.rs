// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tj append <journal> [text]...` - Append records to a journal

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use tj_storage::{Journal, JournalConfig, TimestampPrecision};

#[derive(Args)]
pub struct AppendArgs {
    /// Journal file (created if missing)
    pub journal: PathBuf,

    /// Text of each record; one record per stdin line when omitted
    pub texts: Vec<String>,

    /// Skip fsync after each record
    #[arg(long)]
    pub no_sync: bool,

    /// Fractional-second digits in record timestamps
    #[arg(long, value_enum, default_value_t = Precision::Millis)]
    pub precision: Precision,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Precision {
    Millis,
    Micros,
    Nanos,
}

impl From<Precision> for TimestampPrecision {
    fn from(precision: Precision) -> Self {
        match precision {
            Precision::Millis => TimestampPrecision::Millis,
            Precision::Micros => TimestampPrecision::Micros,
            Precision::Nanos => TimestampPrecision::Nanos,
        }
    }
}

pub fn append(args: AppendArgs) -> Result<ExitCode> {
    let config = JournalConfig::default()
        .with_sync(!args.no_sync)
        .with_precision(args.precision.into());
    let mut journal = Journal::open_with(&args.journal, config)
        .with_context(|| format!("cannot open journal {}", args.journal.display()))?;

    let mut count = 0usize;
    if args.texts.is_empty() {
        for line in std::io::stdin().lock().lines() {
            journal.write_text(&line.context("cannot read stdin")?)?;
            count += 1;
        }
    } else {
        for text in &args.texts {
            journal.write_text(text)?;
            count += 1;
        }
    }
    journal.close();

    tracing::debug!(count, path = %args.journal.display(), "append finished");
    println!("Appended {} record(s)", count);
    Ok(ExitCode::SUCCESS)
}
