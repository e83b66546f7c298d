// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for worker log files and their rotated backups.
//!
//! Used by the logger (writer), the launcher, and the aggregator (reader)
//! to agree on file names:
//!   `<dir>/<name>.<ext>`        base path
//!   `<dir>/<name>_<id>.<ext>`   per-worker log
//!   `<dir>/<name>_<id>.<ext>.N` rotated backup, N = 1 is the newest

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::worker::WorkerId;

/// Build the per-worker path by inserting `_<id>` before the extension.
///
/// `logs/run.log` becomes `logs/run_3.log`; a path without an extension
/// just gets the suffix (`logs/run` becomes `logs/run_3`).
pub fn worker_log_path(base: &Path, worker_id: &WorkerId) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = base.file_stem() {
        name.push(stem);
    }
    name.push("_");
    name.push(worker_id.as_str());
    if let Some(ext) = base.extension() {
        name.push(".");
        name.push(ext);
    }
    base.with_file_name(name)
}

/// Build the path of rotated backup `generation` for `path`.
///
/// Structure: `{path}.{generation}`
pub fn backup_path(path: &Path, generation: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", generation));
    PathBuf::from(name)
}

/// List the existing files holding `path`'s history, oldest first.
///
/// Backups `.backup_count` down to `.1` come before the current file;
/// generations that do not exist on disk are skipped.
pub fn rotation_chain(path: &Path, backup_count: u32) -> Vec<PathBuf> {
    let mut chain: Vec<PathBuf> = (1..=backup_count)
        .rev()
        .map(|generation| backup_path(path, generation))
        .filter(|p| p.is_file())
        .collect();
    if path.is_file() {
        chain.push(path.to_path_buf());
    }
    chain
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
