// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for log writing and aggregation

use std::path::{Path, PathBuf};

use thiserror::Error;
use wl_core::WorkerId;

/// Errors that can occur while writing or merging log files
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log file is closed: {}", .0.display())]
    Closed(PathBuf),
    #[error("worker identity already set to {0}")]
    IdentityAlreadySet(WorkerId),
    #[error("malformed record in {} at line {line}: missing \" - \" separator", .path.display())]
    MalformedRecord { path: PathBuf, line: usize },
}

impl LogError {
    /// Adapter for `map_err` that attaches the path an I/O call touched.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> LogError + '_ {
        move |source| LogError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
