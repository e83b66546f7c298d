// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON, or its text lines one per row.
pub fn print<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text_lines: impl FnOnce(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in text_lines(value) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}

/// Summary of an aggregation, shared by `wl aggregate` and `wl run --aggregate`.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub output: String,
    pub inputs: Vec<String>,
    pub records: usize,
}

impl AggregateSummary {
    pub fn new<P: AsRef<Path>>(output: &Path, inputs: &[P], records: usize) -> Self {
        Self {
            output: display_path(output),
            inputs: inputs.iter().map(|p| display_path(p.as_ref())).collect(),
            records,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Aggregated {} record(s) from {} file(s) into {}",
            self.records,
            self.inputs.len(),
            self.output
        )
    }
}

pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
