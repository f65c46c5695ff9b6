// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tj verify <journal>` - Report corrupted entries in a journal

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use tj_storage::RecordStream;

/// Exit status when the journal contains corrupted entries
const CORRUPTED_EXIT: u8 = 2;

#[derive(Args)]
pub struct VerifyArgs {
    /// Journal file
    pub journal: PathBuf,
}

pub fn verify(args: VerifyArgs) -> Result<ExitCode> {
    let mut valid = 0u64;
    let mut corrupted = 0u64;

    let stream = RecordStream::open_with(&args.journal, |corruption| {
        corrupted += 1;
        println!("{}", corruption);
    })
    .with_context(|| format!("cannot read journal {}", args.journal.display()))?;

    for record in stream {
        record?;
        valid += 1;
    }

    println!("{} valid, {} corrupted", valid, corrupted);
    if corrupted > 0 {
        Ok(ExitCode::from(CORRUPTED_EXIT))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
