// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Rotating per-worker log files and their aggregation.

mod aggregate;
pub mod env;
mod error;
mod sink;
mod worker_logger;

pub use aggregate::{aggregate, expand_rotations};
pub use error::LogError;
pub use sink::{RotatingFileSink, SinkConfig};
pub use worker_logger::WorkerLogger;
