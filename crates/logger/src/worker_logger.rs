// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe logger owning one rotating file per worker.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use wl_core::{format_utc_now, log_paths, LogRecord, Severity, WorkerContext, WorkerId};

use crate::{LogError, RotatingFileSink, SinkConfig};

/// Logger for one worker process (or a set of threads within it).
///
/// Writes timestamped lines to a [`RotatingFileSink`]:
///   `2026-01-30T08:14:09.042Z - message`
///
/// Once a worker identity is set the file moves to `<name>_<id>.<ext>` and
/// every line is prefixed:
///   `2026-01-30T08:14:09.042Z - Worker 3: message`
///
/// All methods take `&self`; share the logger across threads with an `Arc`.
/// One lock covers prefixing, appending, and flushing, so concurrent calls
/// never interleave within a line.
pub struct WorkerLogger {
    base_path: PathBuf,
    config: SinkConfig,
    inner: Mutex<Inner>,
}

struct Inner {
    /// `None` once closed
    sink: Option<RotatingFileSink>,
    path: PathBuf,
    worker_id: Option<WorkerId>,
    min_severity: Severity,
}

impl WorkerLogger {
    /// Open a logger at `base_path` with the environment-derived rotation limits.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, LogError> {
        Self::with_config(base_path, SinkConfig::from_env())
    }

    pub fn with_config(base_path: impl Into<PathBuf>, config: SinkConfig) -> Result<Self, LogError> {
        let base_path = base_path.into();
        let sink = RotatingFileSink::open(&base_path, config)?;
        Ok(Self {
            inner: Mutex::new(Inner {
                sink: Some(sink),
                path: base_path.clone(),
                worker_id: None,
                min_severity: Severity::INFO,
            }),
            base_path,
            config,
        })
    }

    /// Open a logger for a launched worker directly at its own log file.
    ///
    /// Unlike `new` followed by `set_worker_identity`, no file is created
    /// at the shared base path.
    pub fn for_worker(ctx: &WorkerContext) -> Result<Self, LogError> {
        Self::for_worker_with_config(ctx, SinkConfig::from_env())
    }

    pub fn for_worker_with_config(
        ctx: &WorkerContext,
        config: SinkConfig,
    ) -> Result<Self, LogError> {
        let sink = RotatingFileSink::open(&ctx.log_file, config)?;
        let mut inner = Inner {
            sink: Some(sink),
            path: ctx.log_file.clone(),
            worker_id: Some(ctx.worker_id.clone()),
            min_severity: Severity::INFO,
        };
        Self::announce_locked(&mut inner, &ctx.worker_id)?;
        Ok(Self {
            inner: Mutex::new(inner),
            base_path: ctx.base_path.clone(),
            config,
        })
    }

    /// Retarget the logger to `<name>_<id>.<ext>` and prefix later lines.
    ///
    /// The new file starts with an unprefixed `Worker ID set: <id>` line.
    ///
    /// The new file is opened before the old one is closed, so a failure
    /// leaves the logger writing where it was. An identity can be set
    /// once; later calls fail with [`LogError::IdentityAlreadySet`].
    ///
    /// Returns the new log path.
    pub fn set_worker_identity(&self, worker_id: impl Into<WorkerId>) -> Result<PathBuf, LogError> {
        let worker_id = worker_id.into();
        let mut inner = self.inner.lock();

        if let Some(existing) = &inner.worker_id {
            return Err(LogError::IdentityAlreadySet(existing.clone()));
        }
        if inner.sink.is_none() {
            return Err(LogError::Closed(inner.path.clone()));
        }

        let path = log_paths::worker_log_path(&self.base_path, &worker_id);
        let sink = RotatingFileSink::open(&path, self.config)?;
        if let Some(mut previous) = inner.sink.replace(sink) {
            if let Err(e) = previous.close() {
                tracing::warn!(error = %e, "failed to close previous log file");
            }
        }

        tracing::debug!(
            worker_id = %worker_id,
            path = %path.display(),
            "worker identity set"
        );

        inner.path = path.clone();
        inner.worker_id = Some(worker_id.clone());
        Self::announce_locked(&mut inner, &worker_id)?;
        Ok(path)
    }

    /// Log `message` at [`Severity::INFO`].
    pub fn log(&self, message: &str) -> Result<(), LogError> {
        self.log_at(Severity::INFO, message)
    }

    /// Log `message` if `severity` passes the logger's threshold.
    pub fn log_at(&self, severity: Severity, message: &str) -> Result<(), LogError> {
        let mut inner = self.inner.lock();
        if severity < inner.min_severity {
            return Ok(());
        }
        Self::write_locked(&mut inner, message)
    }

    /// Flush and release the file. Safe to call repeatedly.
    pub fn close(&self) -> Result<(), LogError> {
        let mut inner = self.inner.lock();
        match inner.sink.take() {
            Some(mut sink) => sink.close(),
            None => Ok(()),
        }
    }

    /// The path the logger was created with, before any identity suffix.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The file currently being written.
    pub fn path(&self) -> PathBuf {
        self.inner.lock().path.clone()
    }

    pub fn worker_id(&self) -> Option<WorkerId> {
        self.inner.lock().worker_id.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().sink.is_none()
    }

    pub fn min_severity(&self) -> Severity {
        self.inner.lock().min_severity
    }

    /// Discard lines logged below `severity` (default [`Severity::INFO`]).
    pub fn set_min_severity(&self, severity: Severity) {
        self.inner.lock().min_severity = severity;
    }

    fn write_locked(inner: &mut Inner, message: &str) -> Result<(), LogError> {
        let message = match &inner.worker_id {
            Some(id) => format!("Worker {}: {}", id, message),
            None => message.to_string(),
        };
        Self::append_locked(inner, message)
    }

    /// Identity announcement, written without the worker prefix.
    fn announce_locked(inner: &mut Inner, worker_id: &WorkerId) -> Result<(), LogError> {
        Self::append_locked(inner, format!("Worker ID set: {}", worker_id))
    }

    fn append_locked(inner: &mut Inner, message: String) -> Result<(), LogError> {
        let sink = inner
            .sink
            .as_mut()
            .ok_or_else(|| LogError::Closed(inner.path.clone()))?;
        let record = LogRecord::new(format_utc_now(), message);
        sink.append(&record.to_line())
    }
}

impl std::fmt::Debug for WorkerLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("WorkerLogger")
            .field("base_path", &self.base_path)
            .field("path", &inner.path)
            .field("worker_id", &inner.worker_id)
            .field("closed", &inner.sink.is_none())
            .finish()
    }
}

#[cfg(test)]
#[path = "worker_logger_tests.rs"]
mod tests;
