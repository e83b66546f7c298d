// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run N worker processes against one base log path.
//!
//! Worker `i` writes `<name>_<i>.<ext>`. Workers share nothing; keeping
//! their files apart is what makes concurrent logging safe without any
//! cross-process locking.

use std::path::{Path, PathBuf};

use tokio::process::Child;
use wl_core::{WorkerContext, WorkerId};
use wl_logger::WorkerLogger;

use crate::{LaunchError, WorkRoutine};

/// Launch `num_workers` copies of `routine` logging next to `base_logger`.
///
/// Paths derive from the logger's original base path, not from any
/// identity it may have taken since.
pub async fn launch(
    routine: &WorkRoutine,
    num_workers: usize,
    base_logger: &WorkerLogger,
) -> Result<Vec<PathBuf>, LaunchError> {
    launch_from_base(routine, num_workers, base_logger.base_path()).await
}

/// Launch `num_workers` copies of `routine` and wait for all of them.
///
/// Returns the per-worker log paths in worker order. Workers are not
/// retried and completed ones are not rolled back. A non-zero exit is
/// reported through tracing only, so a returned path may point at an
/// incomplete or missing file.
///
/// If a worker fails to spawn, the ones already running are waited for
/// before the error is returned.
pub async fn launch_from_base(
    routine: &WorkRoutine,
    num_workers: usize,
    base_path: &Path,
) -> Result<Vec<PathBuf>, LaunchError> {
    let contexts: Vec<WorkerContext> = (0..num_workers)
        .map(|i| WorkerContext::new(i, base_path))
        .collect();

    let mut children = Vec::with_capacity(contexts.len());
    for ctx in &contexts {
        match routine.command(ctx).spawn() {
            Ok(child) => {
                tracing::debug!(
                    worker_id = %ctx.worker_id,
                    pid = child.id(),
                    log_file = %ctx.log_file.display(),
                    "spawned worker"
                );
                children.push((ctx.worker_id.clone(), child));
            }
            Err(source) => {
                // Failure to wait on the others is secondary to the spawn error.
                let _ = wait_all(children).await;
                return Err(LaunchError::Spawn {
                    worker: ctx.worker_id.clone(),
                    source,
                });
            }
        }
    }

    wait_all(children).await?;
    Ok(contexts.into_iter().map(|ctx| ctx.log_file).collect())
}

/// Wait for every child, returning the first wait failure.
async fn wait_all(children: Vec<(WorkerId, Child)>) -> Result<(), LaunchError> {
    let mut first_error = None;
    for (worker_id, mut child) in children {
        match child.wait().await {
            Ok(status) if status.success() => {
                tracing::debug!(worker_id = %worker_id, "worker exited");
            }
            Ok(status) => {
                tracing::warn!(worker_id = %worker_id, %status, "worker exited unsuccessfully");
            }
            Err(source) => {
                tracing::warn!(worker_id = %worker_id, error = %source, "failed to wait for worker");
                first_error.get_or_insert(LaunchError::Wait {
                    worker: worker_id,
                    source,
                });
            }
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
