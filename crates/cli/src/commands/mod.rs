// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod aggregate;
pub mod run;
pub mod sample;
pub mod worker;
