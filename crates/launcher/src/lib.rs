// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Spawn worker processes that each log to their own file.

mod error;
mod launcher;
mod routine;

pub use error::LaunchError;
pub use launcher::{launch, launch_from_base};
pub use routine::WorkRoutine;
