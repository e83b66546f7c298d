// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wl sample`: host metrics on demand

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use wl_logger::WorkerLogger;
use wl_metrics::{HostProbe, HostSnapshot, MetricsSampler, SamplerConfig, SysinfoProbe};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct SampleArgs {
    /// Log file to write metric lines to
    #[arg(long, required_unless_present = "once")]
    pub log: Option<PathBuf>,

    /// How long to keep the sampler running
    #[arg(long, default_value_t = 5000)]
    pub duration_ms: u64,

    /// Take a single reading and print it
    #[arg(long)]
    pub once: bool,
}

pub fn handle(args: SampleArgs, format: OutputFormat) -> Result<()> {
    if args.once {
        return sample_once(args.log.as_deref(), format);
    }
    let Some(path) = args.log else {
        anyhow::bail!("--log is required unless --once is given");
    };

    let logger = Arc::new(open(&path)?);
    let sampler = MetricsSampler::get_or_create(Arc::clone(&logger));
    sampler.start()?;
    std::thread::sleep(Duration::from_millis(args.duration_ms));
    sampler.stop();
    logger.close()?;

    tracing::debug!(path = %path.display(), "sampling finished");
    Ok(())
}

/// One reading over the configured CPU window, printed and optionally logged.
fn sample_once(log: Option<&Path>, format: OutputFormat) -> Result<()> {
    let snapshot = read_snapshot(&mut SysinfoProbe::new(), SamplerConfig::from_env().cpu_window);

    if let Some(path) = log {
        let logger = open(path)?;
        for line in snapshot.log_lines() {
            logger.log(&line)?;
        }
        logger.close()?;
    }

    output::print(&snapshot, format, |s| s.log_lines().to_vec())
}

fn read_snapshot(probe: &mut dyn HostProbe, cpu_window: Duration) -> HostSnapshot {
    probe.begin_cpu_window();
    std::thread::sleep(cpu_window);
    probe.snapshot()
}

fn open(path: &Path) -> Result<WorkerLogger> {
    WorkerLogger::new(path).with_context(|| format!("failed to open log {}", path.display()))
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
