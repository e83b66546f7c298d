// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wl aggregate`: merge log files by timestamp

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wl_logger::SinkConfig;

use crate::output::{self, AggregateSummary, OutputFormat};

#[derive(Args)]
pub struct AggregateArgs {
    /// File to write the merged messages to (overwritten)
    #[arg(id = "out", value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Log files to merge
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Also read rotated backups (<file>.N) of each input, oldest first
    #[arg(long)]
    pub include_rotated: bool,
}

pub fn handle(args: AggregateArgs, format: OutputFormat) -> Result<()> {
    let inputs = if args.include_rotated {
        wl_logger::expand_rotations(&args.inputs, SinkConfig::from_env().backup_count)
    } else {
        args.inputs
    };

    let records = wl_logger::aggregate(&inputs, &args.output)?;
    let summary = AggregateSummary::new(&args.output, &inputs, records);
    output::print(&summary, format, |s| vec![s.text()])
}
