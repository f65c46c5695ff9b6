// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tj cat <journal>` - Print the valid records of a journal

use crate::output::{write_line, OutputFormat, RecordView};
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tj_storage::RecordStream;

#[derive(Args)]
pub struct CatArgs {
    /// Journal file
    pub journal: PathBuf,

    /// Prefix each record with its timestamp
    #[arg(short, long)]
    pub timestamps: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn cat(args: CatArgs) -> Result<ExitCode> {
    let stream = RecordStream::open(&args.journal)
        .with_context(|| format!("cannot read journal {}", args.journal.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in stream {
        let view = RecordView::new(&record?, args.timestamps);
        write_line(&mut out, &view, args.format)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
