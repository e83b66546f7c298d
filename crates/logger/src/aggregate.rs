// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merge finished per-worker log files into one chronological stream.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use wl_core::{log_paths, LogRecord};

use crate::LogError;

/// Merge `log_files` into `output`, ordered by timestamp.
///
/// Records are compared by their timestamp strings, not parsed times;
/// the fixed-width timestamp format makes the two agree. The sort is
/// stable, so records with equal timestamps keep the order in which the
/// files (and lines within them) were given.
///
/// Only the message part of each record is written, one per line, and
/// any existing `output` is overwritten. A line without the `" - "`
/// separator aborts the merge before `output` is touched.
///
/// Returns the number of records written.
pub fn aggregate<P: AsRef<Path>>(log_files: &[P], output: &Path) -> Result<usize, LogError> {
    let mut records = Vec::new();
    for path in log_files {
        read_records(path.as_ref(), &mut records)?;
    }

    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(LogError::io(parent))?;
    }
    let file = File::create(output).map_err(LogError::io(output))?;
    let mut writer = BufWriter::new(file);
    for record in &records {
        writeln!(writer, "{}", record.message).map_err(LogError::io(output))?;
    }
    writer.flush().map_err(LogError::io(output))?;

    tracing::debug!(
        inputs = log_files.len(),
        records = records.len(),
        output = %output.display(),
        "aggregated logs"
    );
    Ok(records.len())
}

/// Expand each log file into its rotation chain, oldest backup first.
///
/// A file with no history on disk is kept as-is so that aggregating it
/// still reports the missing file.
pub fn expand_rotations<P: AsRef<Path>>(log_files: &[P], backup_count: u32) -> Vec<PathBuf> {
    log_files
        .iter()
        .flat_map(|path| {
            let path = path.as_ref();
            let chain = log_paths::rotation_chain(path, backup_count);
            if chain.is_empty() {
                vec![path.to_path_buf()]
            } else {
                chain
            }
        })
        .collect()
}

fn read_records(path: &Path, records: &mut Vec<LogRecord>) -> Result<(), LogError> {
    let file = File::open(path).map_err(LogError::io(path))?;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(LogError::io(path))?;
        let record = LogRecord::parse(&line).ok_or_else(|| LogError::MalformedRecord {
            path: path.to_path_buf(),
            line: index + 1,
        })?;
        records.push(record);
    }
    Ok(())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
