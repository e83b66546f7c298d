// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formatting for log lines.
//!
//! Every line a worker writes starts with a fixed-width UTC timestamp:
//!   `2026-01-30T08:14:09.042Z`
//!
//! Aggregation sorts records by comparing these strings byte-wise, so the
//! format must keep lexicographic order equal to chronological order.
//! Zero-padded fields and a fixed millisecond width guarantee that for
//! years 0000-9999.

use std::time::{SystemTime, UNIX_EPOCH};

/// Format the current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_utc_now() -> String {
    format_timestamp(SystemTime::now())
}

/// Format `time` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Times before the Unix epoch clamp to the epoch.
pub fn format_timestamp(time: SystemTime) -> String {
    let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = since_epoch.as_secs();
    let millis = since_epoch.subsec_millis();

    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let (year, month, day) = days_to_civil(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year, month, day, hours, minutes, seconds, millis
    )
}

/// Convert days since Unix epoch to (year, month, day).
///
/// Algorithm from Howard Hinnant's `civil_from_days`.
fn days_to_civil(days: u64) -> (i64, u32, u32) {
    let z = days as i64 + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64; // day of era [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // year of era [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let y = if m <= 2 { y + 1 } else { y };
    (y, m as u32, d as u32)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
