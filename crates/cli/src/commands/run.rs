// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wl run`: launch workers and optionally merge their logs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use wl_launcher::WorkRoutine;
use wl_logger::{SinkConfig, WorkerLogger};

use crate::output::{self, display_path, AggregateSummary, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Number of worker processes
    #[arg(short = 'n', long = "workers", default_value_t = 2)]
    pub workers: usize,

    /// Base log path; worker i writes <name>_<i>.<ext> next to it
    #[arg(long)]
    pub log: PathBuf,

    /// Merge the worker logs into this file after all workers exit
    #[arg(long)]
    pub aggregate: Option<PathBuf>,

    /// Messages each built-in worker logs (ignored with a custom program)
    #[arg(long, default_value_t = 5)]
    pub messages: usize,

    /// Sample host metrics in each built-in worker
    #[arg(long)]
    pub metrics: bool,

    /// Program and arguments to run instead of `wl worker`
    #[arg(last = true)]
    pub program: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    log_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate: Option<AggregateSummary>,
}

pub async fn handle(args: RunArgs, format: OutputFormat) -> Result<()> {
    let routine = routine(&args)?;
    let base_logger = WorkerLogger::new(&args.log)
        .with_context(|| format!("failed to open log {}", args.log.display()))?;

    base_logger.log(&format!("Launching {} worker(s)", args.workers))?;
    let log_files = wl_launcher::launch(&routine, args.workers, &base_logger).await?;
    base_logger.log("All workers finished")?;
    base_logger.close()?;

    let aggregate = match &args.aggregate {
        Some(output) => Some(aggregate_workers(&log_files, output)?),
        None => None,
    };

    let report = RunReport {
        log_files: log_files.iter().map(|p| display_path(p)).collect(),
        aggregate,
    };
    output::print(&report, format, |r| {
        let mut lines = r.log_files.clone();
        if let Some(summary) = &r.aggregate {
            lines.push(summary.text());
        }
        lines
    })
}

fn routine(args: &RunArgs) -> Result<WorkRoutine> {
    if let Some((program, rest)) = args.program.split_first() {
        return Ok(WorkRoutine::new(program).args(rest));
    }
    let mut worker_args = vec![
        "worker".to_string(),
        "--messages".to_string(),
        args.messages.to_string(),
    ];
    if args.metrics {
        worker_args.push("--metrics".to_string());
    }
    Ok(WorkRoutine::current_exe(worker_args)?)
}

/// Merge every worker file that exists, rotated backups included.
///
/// A worker that failed before logging leaves no file; it is skipped.
fn aggregate_workers(log_files: &[PathBuf], output: &Path) -> Result<AggregateSummary> {
    let present: Vec<&PathBuf> = log_files
        .iter()
        .filter(|path| {
            let exists = path.exists();
            if !exists {
                tracing::warn!(path = %path.display(), "worker log missing, skipping");
            }
            exists
        })
        .collect();
    let inputs = wl_logger::expand_rotations(&present, SinkConfig::from_env().backup_count);
    let records = wl_logger::aggregate(&inputs, output)?;
    Ok(AggregateSummary::new(output, &inputs, records))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
