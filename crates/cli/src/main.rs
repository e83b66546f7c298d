// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wl - per-worker logging, host metrics, and log aggregation

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{aggregate, run, sample, worker};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "wl",
    version,
    about = "Worklog - per-worker rotating logs, host metrics, and log aggregation"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch worker processes, each logging to its own file
    Run(run::RunArgs),
    /// Built-in work routine run by `wl run`
    Worker(worker::WorkerArgs),
    /// Merge log files into one, ordered by timestamp
    Aggregate(aggregate::AggregateArgs),
    /// Sample host metrics into a log file
    Sample(sample::SampleArgs),
}

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = run().await {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays parseable with `-o json`.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered so
/// context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    match cli.command {
        Commands::Run(args) => run::handle(args, format).await,
        Commands::Worker(args) => worker::handle(args),
        Commands::Aggregate(args) => aggregate::handle(args, format),
        Commands::Sample(args) => sample::handle(args, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
