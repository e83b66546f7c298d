// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the metrics crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Sampling period override (`WL_METRICS_PERIOD_MS`)
pub fn metrics_period() -> Option<Duration> {
    parse_duration_ms("WL_METRICS_PERIOD_MS")
}

/// CPU measurement window override (`WL_METRICS_CPU_WINDOW_MS`)
pub fn metrics_cpu_window() -> Option<Duration> {
    parse_duration_ms("WL_METRICS_CPU_WINDOW_MS")
}
