// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker identity and the launch environment contract.
//!
//! A launcher tells each worker process who it is through three
//! environment variables:
//!   `WL_WORKER_ID`  - opaque worker label
//!   `WL_LOG_BASE`   - the shared base log path (`name.ext`)
//!   `WL_LOG_FILE`   - this worker's own log path (`name_<id>.ext`)

use std::borrow::Borrow;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log_paths;

pub const WORKER_ID_ENV: &str = "WL_WORKER_ID";
pub const LOG_BASE_ENV: &str = "WL_LOG_BASE";
pub const LOG_FILE_ENV: &str = "WL_LOG_FILE";

/// Opaque label distinguishing one worker's log file from the others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WorkerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<usize> for WorkerId {
    fn from(n: usize) -> Self {
        Self(n.to_string())
    }
}

impl From<u32> for WorkerId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for WorkerId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl PartialEq<str> for WorkerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WorkerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for WorkerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What a launched worker process needs to know to open its logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerContext {
    pub worker_id: WorkerId,
    pub base_path: PathBuf,
    pub log_file: PathBuf,
}

impl WorkerContext {
    /// Build the context for worker `worker_id` sharing `base_path`.
    pub fn new(worker_id: impl Into<WorkerId>, base_path: impl Into<PathBuf>) -> Self {
        let worker_id = worker_id.into();
        let base_path = base_path.into();
        let log_file = log_paths::worker_log_path(&base_path, &worker_id);
        Self {
            worker_id,
            base_path,
            log_file,
        }
    }

    /// Read the context from the launch environment.
    ///
    /// Returns `None` unless both `WL_WORKER_ID` and `WL_LOG_BASE` are set.
    /// `WL_LOG_FILE` is optional and derived from the base when absent.
    pub fn from_env() -> Option<Self> {
        let worker_id = std::env::var(WORKER_ID_ENV).ok().filter(|s| !s.is_empty())?;
        let base_path = std::env::var_os(LOG_BASE_ENV).filter(|s| !s.is_empty())?;
        let mut ctx = Self::new(worker_id, PathBuf::from(base_path));
        if let Some(log_file) = std::env::var_os(LOG_FILE_ENV).filter(|s| !s.is_empty()) {
            ctx.log_file = PathBuf::from(log_file);
        }
        Some(ctx)
    }

    /// Environment variables to hand to the worker process.
    ///
    /// Paths are passed as raw OS strings so non-UTF-8 names survive.
    pub fn env_vars(&self) -> [(&'static str, OsString); 3] {
        [
            (WORKER_ID_ENV, OsString::from(self.worker_id.as_str())),
            (LOG_BASE_ENV, self.base_path.as_os_str().to_os_string()),
            (LOG_FILE_ENV, self.log_file.as_os_str().to_os_string()),
        ]
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
