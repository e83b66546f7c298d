// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wl-core: shared vocabulary for the worklog crates
//!
//! Line format, timestamps, severities, worker identities, and the path
//! naming rules that writers and readers of worker logs agree on.

pub mod log_paths;
pub mod record;
pub mod severity;
pub mod time_fmt;
pub mod worker;

pub use record::{LogRecord, SEPARATOR};
pub use severity::Severity;
pub use time_fmt::{format_timestamp, format_utc_now};
pub use worker::{WorkerContext, WorkerId};
