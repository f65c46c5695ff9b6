// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tj - tinyjournal CLI

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{append, cat, verify};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "tj",
    version,
    about = "tinyjournal - append-only, checksummed journal files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append records to a journal
    Append(append::AppendArgs),
    /// Print the valid records of a journal
    Cat(cat::CatArgs),
    /// Report corrupted entries in a journal
    Verify(verify::VerifyArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Append(args) => append::append(args),
        Commands::Cat(args) => cat::cat(args),
        Commands::Verify(args) => verify::verify(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, `warn` and above unless `RUST_LOG` says otherwise
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
