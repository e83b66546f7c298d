// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity tags attached to log calls.

use std::fmt;

/// Numeric severity tag.
///
/// Any value is accepted; the named constants follow the conventional
/// 10-step scale. Severity only decides whether a line passes a logger's
/// threshold and is never written into the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(pub u32);

impl Severity {
    pub const DEBUG: Severity = Severity(10);
    pub const INFO: Severity = Severity(20);
    pub const WARNING: Severity = Severity(30);
    pub const ERROR: Severity = Severity(40);
    pub const CRITICAL: Severity = Severity(50);

    /// Conventional name, if this is one of the named levels.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::DEBUG => Some("DEBUG"),
            Self::INFO => Some("INFO"),
            Self::WARNING => Some("WARNING"),
            Self::ERROR => Some("ERROR"),
            Self::CRITICAL => Some("CRITICAL"),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::INFO
    }
}

impl From<u32> for Severity {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level {}", self.0),
        }
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
