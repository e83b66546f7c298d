// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk line format shared by the logger (writer) and aggregator (reader).
//!
//! Format: `<timestamp> - <message>`

/// Separator between the timestamp and the message.
pub const SEPARATOR: &str = " - ";

/// One stored log line split into its timestamp and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Split a stored line on the first [`SEPARATOR`].
    ///
    /// A trailing newline is not part of the message. Returns `None` when
    /// the separator is missing.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split_once(SEPARATOR)
            .map(|(timestamp, message)| Self::new(timestamp, message))
    }

    /// Render the record as a line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.timestamp, SEPARATOR, self.message)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
