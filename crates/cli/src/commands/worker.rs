// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wl worker`: the built-in work routine
//!
//! Run by `wl run` with the launch environment set. Logs a fixed number of
//! progress messages, optionally sampling host metrics into the same file.
//! Prints nothing to stdout so the parent's output stays clean.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use wl_core::WorkerContext;
use wl_logger::WorkerLogger;
use wl_metrics::MetricsSampler;

#[derive(Args)]
pub struct WorkerArgs {
    /// Number of progress messages to log
    #[arg(long, default_value_t = 5)]
    pub messages: usize,

    /// Delay between messages
    #[arg(long, default_value_t = 10)]
    pub interval_ms: u64,

    /// Sample host metrics into the worker log while working
    #[arg(long)]
    pub metrics: bool,

    /// Base log path (defaults to $WL_LOG_BASE)
    #[arg(long, requires = "id")]
    pub log: Option<PathBuf>,

    /// Worker id (defaults to $WL_WORKER_ID)
    #[arg(long, requires = "log")]
    pub id: Option<String>,
}

pub fn handle(args: WorkerArgs) -> Result<()> {
    let ctx = context(&args)?;
    let logger = Arc::new(
        WorkerLogger::for_worker(&ctx)
            .with_context(|| format!("failed to open log {}", ctx.log_file.display()))?,
    );

    let sampler = if args.metrics {
        let sampler = MetricsSampler::get_or_create(Arc::clone(&logger));
        sampler.start()?;
        Some(sampler)
    } else {
        None
    };

    let result = do_work(&logger, args.messages, Duration::from_millis(args.interval_ms));

    if let Some(sampler) = sampler {
        sampler.stop();
    }
    result?;
    logger.log("Work complete")?;
    logger.close()?;
    Ok(())
}

fn context(args: &WorkerArgs) -> Result<WorkerContext> {
    match (&args.log, &args.id) {
        (Some(log), Some(id)) => Ok(WorkerContext::new(id.as_str(), log.clone())),
        _ => WorkerContext::from_env().ok_or_else(|| {
            anyhow::anyhow!("no worker context: pass --log and --id, or launch with `wl run`")
        }),
    }
}

fn do_work(logger: &WorkerLogger, messages: usize, interval: Duration) -> Result<()> {
    for i in 1..=messages {
        logger.log(&format!("Processing item {}/{}", i, messages))?;
        if i < messages {
            std::thread::sleep(interval);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
