// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size-bounded, backup-rotated append-only log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use wl_core::log_paths;

use crate::env;
use crate::LogError;

/// Default size bound before rotation (1 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Default number of rotated files to keep (`.1` through `.5`).
pub const DEFAULT_BACKUP_COUNT: u32 = 5;

/// Rotation limits for a [`RotatingFileSink`].
///
/// Rotation is disabled when either limit is zero; the file then grows
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub max_bytes: u64,
    pub backup_count: u32,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl SinkConfig {
    /// Defaults, overridden by `WL_LOG_MAX_BYTES` / `WL_LOG_BACKUPS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_bytes: env::log_max_bytes().unwrap_or(defaults.max_bytes),
            backup_count: env::log_backups().unwrap_or(defaults.backup_count),
        }
    }

    fn rotates(&self) -> bool {
        self.max_bytes > 0 && self.backup_count > 0
    }
}

/// Append-only writer bound to one path.
///
/// Each [`append`](Self::append) writes one newline-terminated line with a
/// single `write_all` on an `O_APPEND` handle. When the line would push the
/// file past `max_bytes`, the file is rotated first:
///   `path.N` is deleted, `path.i` moves to `path.i+1`, `path` moves to `path.1`
///
/// A failed rotation is reported to the caller, and the sink keeps writing
/// to `path`; the next append that needs a rotation tries again.
pub struct RotatingFileSink {
    path: PathBuf,
    config: SinkConfig,
    /// `None` after [`close`](Self::close), or while a reopen is pending
    file: Option<File>,
    len: u64,
    closed: bool,
}

impl RotatingFileSink {
    /// Open (creating parent directories and the file if needed) for appending.
    pub fn open(path: impl Into<PathBuf>, config: SinkConfig) -> Result<Self, LogError> {
        let path = path.into();
        let (file, len) = open_append(&path)?;
        Ok(Self {
            path,
            config,
            file: Some(file),
            len,
            closed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> SinkConfig {
        self.config
    }

    /// Current size of the active file in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Append `line` followed by a newline, rotating first if needed.
    pub fn append(&mut self, line: &str) -> Result<(), LogError> {
        if self.closed {
            return Err(LogError::Closed(self.path.clone()));
        }
        if self.file.is_none() {
            self.reopen()?;
        }

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        if self.should_rotate(buf.len() as u64) {
            self.rotate()?;
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LogError::Closed(self.path.clone()))?;
        file.write_all(buf.as_bytes())
            .and_then(|()| file.flush())
            .map_err(LogError::io(&self.path))?;
        self.len += buf.len() as u64;
        Ok(())
    }

    /// Flush and release the file handle. Safe to call repeatedly.
    pub fn close(&mut self) -> Result<(), LogError> {
        self.closed = true;
        self.release()
    }

    fn release(&mut self) -> Result<(), LogError> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .and_then(|()| file.sync_all())
                .map_err(LogError::io(&self.path))?;
        }
        Ok(())
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        // An empty file is never rotated, even for an oversized line.
        self.config.rotates() && self.len > 0 && self.len + incoming > self.config.max_bytes
    }

    fn reopen(&mut self) -> Result<(), LogError> {
        let (file, len) = open_append(&self.path)?;
        self.file = Some(file);
        self.len = len;
        Ok(())
    }

    fn rotate(&mut self) -> Result<(), LogError> {
        // Release the handle before renaming the file out from under it.
        self.release()?;
        let shifted = self.shift_backups();
        // Whatever happened to the backups, keep writing to `path`.
        self.reopen()?;
        shifted?;

        tracing::debug!(
            path = %self.path.display(),
            backups = self.config.backup_count,
            "rotated log file"
        );
        Ok(())
    }

    fn shift_backups(&self) -> Result<(), LogError> {
        let oldest = log_paths::backup_path(&self.path, self.config.backup_count);
        remove_if_exists(&oldest)?;

        // Shift older rotations: .N-1 -> .N, ..., .1 -> .2
        for generation in (1..self.config.backup_count).rev() {
            let from = log_paths::backup_path(&self.path, generation);
            let to = log_paths::backup_path(&self.path, generation + 1);
            rename_if_exists(&from, &to)?;
        }

        // Rotate current -> .1
        let first = log_paths::backup_path(&self.path, 1);
        fs::rename(&self.path, &first).map_err(LogError::io(&self.path))
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to close log file on drop");
        }
    }
}

fn open_append(path: &Path) -> Result<(File, u64), LogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(LogError::io(parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::io(path))?;
    let len = file.metadata().map_err(LogError::io(path))?.len();
    Ok((file, len))
}

fn remove_if_exists(path: &Path) -> Result<(), LogError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LogError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn rename_if_exists(from: &Path, to: &Path) -> Result<(), LogError> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LogError::Io {
            path: from.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
