// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resettable cancellation flag with interruptible waits.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A flag that background loops poll and wait on.
///
/// [`wait_timeout`](Self::wait_timeout) returns as soon as the flag is
/// set, so a loop that waits through it stops with bounded latency.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: Mutex<bool>,
    cond: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag and wake every waiter.
    pub fn set(&self) {
        *self.stopped.lock() = true;
        self.cond.notify_all();
    }

    pub fn reset(&self) {
        *self.stopped.lock() = false;
    }

    pub fn is_set(&self) -> bool {
        *self.stopped.lock()
    }

    /// Wait until the flag is set or `timeout` elapses.
    ///
    /// Returns `true` if the flag is set.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut stopped = self.stopped.lock();
        match Instant::now().checked_add(timeout) {
            Some(deadline) => {
                while !*stopped {
                    if self.cond.wait_until(&mut stopped, deadline).timed_out() {
                        break;
                    }
                }
            }
            None => {
                while !*stopped {
                    self.cond.wait(&mut stopped);
                }
            }
        }
        *stopped
    }
}

#[cfg(test)]
#[path = "stop_signal_tests.rs"]
mod tests;
