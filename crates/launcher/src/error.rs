// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for launching workers

use thiserror::Error;
use wl_core::WorkerId;

/// Errors that can occur while launching worker processes
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to locate current executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: WorkerId,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for worker {worker}: {source}")]
    Wait {
        worker: WorkerId,
        #[source]
        source: std::io::Error,
    },
}
