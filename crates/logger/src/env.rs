// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the logger crate.

/// Rotation size bound override (`WL_LOG_MAX_BYTES`)
pub fn log_max_bytes() -> Option<u64> {
    std::env::var("WL_LOG_MAX_BYTES")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
}

/// Backup retention override (`WL_LOG_BACKUPS`)
pub fn log_backups() -> Option<u32> {
    std::env::var("WL_LOG_BACKUPS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
}
