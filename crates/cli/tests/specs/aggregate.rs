//! `wl aggregate` specs

use crate::prelude::*;

#[test]
fn aggregate_orders_by_timestamp_across_files() {
    let work = Workdir::new();
    work.file(
        "a.log",
        "2026-03-01T10:00:02.000Z - C\n2026-03-01T10:00:00.000Z - A\n",
    );
    work.file("b.log", "2026-03-01T10:00:01.000Z - B\n");

    work.wl()
        .args(&["aggregate", "out/all.log", "a.log", "b.log"])
        .passes()
        .stdout_eq("Aggregated 3 record(s) from 2 file(s) into out/all.log\n");

    assert_eq!(work.read("out/all.log"), "A\nB\nC\n");
}

#[test]
fn aggregate_keeps_input_order_for_equal_timestamps() {
    let work = Workdir::new();
    work.file("first.log", "2026-03-01T10:00:00.000Z - from first\n");
    work.file("second.log", "2026-03-01T10:00:00.000Z - from second\n");

    work.wl()
        .args(&["aggregate", "all.log", "second.log", "first.log"])
        .passes();

    assert_eq!(work.read("all.log"), "from second\nfrom first\n");
}

#[test]
fn aggregate_include_rotated_reads_backups_oldest_first() {
    let work = Workdir::new();
    work.file("w.log.2", "2026-03-01T10:00:00.000Z - oldest\n");
    work.file("w.log.1", "2026-03-01T10:00:00.000Z - older\n");
    work.file("w.log", "2026-03-01T10:00:00.000Z - newest\n");

    work.wl()
        .args(&["aggregate", "all.log", "w.log", "--include-rotated"])
        .passes()
        .stdout_has("from 3 file(s)");

    assert_eq!(work.read("all.log"), "oldest\nolder\nnewest\n");
}

#[test]
fn aggregate_json_reports_inputs_and_count() {
    let work = Workdir::new();
    work.file("a.log", "2026-03-01T10:00:00.000Z - only\n");

    let json = work
        .wl()
        .args(&["aggregate", "all.log", "a.log", "-o", "json"])
        .passes()
        .json();

    assert_eq!(
        json,
        serde_json::json!({
            "output": "all.log",
            "inputs": ["a.log"],
            "records": 1,
        })
    );
}

#[test]
fn aggregate_overwrites_existing_output() {
    let work = Workdir::new();
    work.file("a.log", "2026-03-01T10:00:00.000Z - fresh\n");
    work.file("all.log", "stale\nstale\n");

    work.wl().args(&["aggregate", "all.log", "a.log"]).passes();

    assert_eq!(work.read("all.log"), "fresh\n");
}
