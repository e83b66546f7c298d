// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide background sampler writing host metrics into a worker log.
//!
//! The sampler runs on its own thread:
//!   open CPU window -> wait `cpu_window` -> log 3 metric lines -> wait `period`
//!
//! Both waits go through a [`StopSignal`], so [`MetricsSampler::stop`]
//! interrupts them instead of sleeping them out. Metric lines go through
//! the bound [`WorkerLogger`] and take the same lock as application logging.

use std::sync::{Arc, OnceLock};
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use wl_logger::WorkerLogger;

use crate::env;
use crate::probe::{HostProbe, SysinfoProbe};
use crate::stop_signal::StopSignal;

/// Default time between samples (5 seconds).
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

/// Default CPU measurement window (1 second).
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Errors that can occur when starting the sampler
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("failed to spawn sampler thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Sampling cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub period: Duration,
    pub cpu_window: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            cpu_window: DEFAULT_CPU_WINDOW,
        }
    }
}

impl SamplerConfig {
    /// Defaults, overridden by `WL_METRICS_PERIOD_MS` / `WL_METRICS_CPU_WINDOW_MS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            period: env::metrics_period().unwrap_or(defaults.period),
            cpu_window: env::metrics_cpu_window().unwrap_or(defaults.cpu_window),
        }
    }
}

/// State shared with the sampling thread.
struct Shared {
    logger: Mutex<Arc<WorkerLogger>>,
    probe: Mutex<Box<dyn HostProbe>>,
    stop: StopSignal,
    config: SamplerConfig,
}

/// Background host-metrics sampler.
///
/// Obtained through a [`SamplerRegistry`]; one registry hands out one
/// sampler no matter how often it is asked. Start and stop it any number
/// of times. Dropping the last handle stops it.
pub struct MetricsSampler {
    shared: Arc<Shared>,
    /// Handle of the live sampling thread, if any
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl MetricsSampler {
    fn new(logger: Arc<WorkerLogger>, config: SamplerConfig, probe: Box<dyn HostProbe>) -> Self {
        Self {
            shared: Arc::new(Shared {
                logger: Mutex::new(logger),
                probe: Mutex::new(probe),
                stop: StopSignal::new(),
                config,
            }),
            worker: Mutex::new(None),
        }
    }

    /// The process-wide sampler, bound to `logger`.
    ///
    /// Shorthand for `SamplerRegistry::global().get_or_create(logger)`.
    pub fn get_or_create(logger: Arc<WorkerLogger>) -> Arc<MetricsSampler> {
        SamplerRegistry::global().get_or_create(logger)
    }

    /// Point later samples at `logger`.
    pub fn bind(&self, logger: Arc<WorkerLogger>) {
        *self.shared.logger.lock() = logger;
    }

    pub fn logger(&self) -> Arc<WorkerLogger> {
        Arc::clone(&self.shared.logger.lock())
    }

    pub fn config(&self) -> SamplerConfig {
        self.shared.config
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start the sampling thread. Does nothing if it is already running.
    pub fn start(&self) -> Result<(), SamplerError> {
        let mut worker = self.worker.lock();
        if worker.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return Ok(());
        }
        if let Some(finished) = worker.take() {
            join_sampler(finished);
        }

        self.shared.stop.reset();
        let shared = Arc::clone(&self.shared);
        let handle = std::thread::Builder::new()
            .name("metrics-sampler".to_string())
            .spawn(move || run(shared))
            .map_err(SamplerError::Spawn)?;
        *worker = Some(handle);
        Ok(())
    }

    /// Stop the sampling thread and wait for it to exit.
    ///
    /// No metric line is written after this returns. Does nothing if the
    /// sampler is not running.
    pub fn stop(&self) {
        // Held across the join so a concurrent `start` cannot reset the
        // signal under the exiting thread.
        let mut worker = self.worker.lock();
        self.shared.stop.set();
        if let Some(handle) = worker.take() {
            join_sampler(handle);
        }
    }
}

impl Drop for MetricsSampler {
    /// A sampler dropped while running stops its thread first.
    fn drop(&mut self) {
        self.stop();
    }
}

fn join_sampler(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        tracing::warn!("metrics sampler thread panicked");
    }
}

fn run(shared: Arc<Shared>) {
    tracing::debug!(
        period_ms = shared.config.period.as_millis() as u64,
        "metrics sampler started"
    );

    while !shared.stop.is_set() {
        shared.probe.lock().begin_cpu_window();
        if shared.stop.wait_timeout(shared.config.cpu_window) {
            break;
        }
        let snapshot = shared.probe.lock().snapshot();

        let logger = Arc::clone(&shared.logger.lock());
        for line in snapshot.log_lines() {
            if let Err(e) = logger.log(&line) {
                tracing::warn!(error = %e, "failed to write metrics line");
            }
        }

        if shared.stop.wait_timeout(shared.config.period) {
            break;
        }
    }

    tracing::debug!("metrics sampler stopped");
}

/// Holds at most one [`MetricsSampler`].
///
/// [`SamplerRegistry::global`] is the process-wide instance. A registry
/// can also be created and passed around explicitly where a context
/// object is available.
#[derive(Default)]
pub struct SamplerRegistry {
    slot: Mutex<Option<Arc<MetricsSampler>>>,
}

impl SamplerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static SamplerRegistry {
        static GLOBAL: OnceLock<SamplerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(SamplerRegistry::new)
    }

    /// Return the sampler, creating it on first use.
    ///
    /// The first call builds it with [`SamplerConfig::from_env`] and a
    /// [`SysinfoProbe`]. Every call rebinds the sampler to `logger`.
    pub fn get_or_create(&self, logger: Arc<WorkerLogger>) -> Arc<MetricsSampler> {
        self.get_or_create_with(logger, SamplerConfig::from_env(), || -> Box<dyn HostProbe> {
            Box::new(SysinfoProbe::new())
        })
    }

    /// Like [`get_or_create`](Self::get_or_create), with the first
    /// construction's config and probe supplied by the caller.
    ///
    /// `config` and `probe` are ignored when the sampler already exists.
    pub fn get_or_create_with<F>(
        &self,
        logger: Arc<WorkerLogger>,
        config: SamplerConfig,
        probe: F,
    ) -> Arc<MetricsSampler>
    where
        F: FnOnce() -> Box<dyn HostProbe>,
    {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some(sampler) => {
                sampler.bind(logger);
                Arc::clone(sampler)
            }
            None => {
                let sampler = Arc::new(MetricsSampler::new(logger, config, probe()));
                *slot = Some(Arc::clone(&sampler));
                sampler
            }
        }
    }

    /// The sampler, if one has been created.
    pub fn get(&self) -> Option<Arc<MetricsSampler>> {
        self.slot.lock().clone()
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
