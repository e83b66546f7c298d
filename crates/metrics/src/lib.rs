// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Background host-resource sampling into a worker log.

pub mod env;
mod probe;
mod sampler;
mod stop_signal;

pub use probe::{HostProbe, HostSnapshot, SysinfoProbe};
pub use sampler::{MetricsSampler, SamplerConfig, SamplerError, SamplerRegistry};
pub use stop_signal::StopSignal;
