// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host resource probes polled by the sampler.

use serde::Serialize;
use sysinfo::{Disks, System};

/// One reading of host resource usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HostSnapshot {
    /// CPU utilization over the last measurement window, 0-100
    pub cpu_percent: f32,
    /// Used memory as a share of total, 0-100
    pub memory_percent: f32,
    /// Cumulative bytes read, summed over all disks
    pub disk_reads: u64,
    /// Cumulative bytes written, summed over all disks
    pub disk_writes: u64,
}

impl HostSnapshot {
    /// The three lines the sampler writes for this reading.
    pub fn log_lines(&self) -> [String; 3] {
        [
            format!("CPU Usage: {:.1}%", self.cpu_percent),
            format!("Memory Usage: {:.1}%", self.memory_percent),
            format!(
                "Disk I/O (Reads: {}, Writes: {})",
                self.disk_reads, self.disk_writes
            ),
        ]
    }
}

/// Source of host resource readings.
///
/// CPU utilization is measured over a window: the sampler calls
/// [`begin_cpu_window`](Self::begin_cpu_window), waits, then calls
/// [`snapshot`](Self::snapshot), which reports usage since the window began.
pub trait HostProbe: Send {
    fn begin_cpu_window(&mut self);
    fn snapshot(&mut self) -> HostSnapshot;
}

/// [`HostProbe`] backed by the `sysinfo` crate.
pub struct SysinfoProbe {
    system: System,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn begin_cpu_window(&mut self) {
        self.system.refresh_cpu_usage();
    }

    fn snapshot(&mut self) -> HostSnapshot {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let memory_percent = if total == 0 {
            0.0
        } else {
            (self.system.used_memory() as f64 / total as f64 * 100.0) as f32
        };

        let disks = Disks::new_with_refreshed_list();
        let (disk_reads, disk_writes) = disks.list().iter().fold((0u64, 0u64), |(r, w), disk| {
            let usage = disk.usage();
            (
                r.saturating_add(usage.total_read_bytes),
                w.saturating_add(usage.total_written_bytes),
            )
        });

        HostSnapshot {
            cpu_percent: self.system.global_cpu_usage(),
            memory_percent,
            disk_reads,
            disk_writes,
        }
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
