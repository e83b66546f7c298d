//! `wl sample` specs

use crate::prelude::*;

#[test]
fn sample_once_prints_three_metric_lines() {
    let run = cli().args(&["sample", "--once"]).passes();

    let stdout = run.stdout();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("CPU Usage: "));
    assert!(lines[1].starts_with("Memory Usage: "));
    assert!(lines[2].starts_with("Disk I/O (Reads: "));
}

#[test]
fn sample_once_json_has_every_metric() {
    let json = cli().args(&["sample", "--once", "-o", "json"]).passes().json();

    for key in ["cpu_percent", "memory_percent", "disk_reads", "disk_writes"] {
        assert!(json.get(key).is_some(), "missing {key} in {json}");
    }
}

#[test]
fn sample_writes_metric_lines_while_running() {
    let work = Workdir::new();

    work.wl()
        .args(&["sample", "--log", "host.log", "--duration-ms", "300"])
        .passes();

    let msgs = work.messages("host.log");
    assert!(msgs.len() >= 3, "{msgs:?}");
    assert_eq!(msgs.len() % 3, 0);
    assert!(msgs[0].starts_with("CPU Usage: "));
}
