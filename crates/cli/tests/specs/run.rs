//! `wl run` specs
//!
//! Launch workers, check the per-worker files and the merged output.

use crate::prelude::*;

fn worker_messages(id: usize, count: usize) -> Vec<String> {
    let mut msgs = vec![format!("Worker ID set: {id}")];
    msgs.extend((1..=count).map(|i| format!("Worker {id}: Processing item {i}/{count}")));
    msgs.push(format!("Worker {id}: Work complete"));
    msgs
}

#[test]
fn run_prints_one_log_path_per_worker() {
    let work = Workdir::new();

    work.wl()
        .args(&["run", "-n", "3", "--log", "logs/train.log", "--messages", "2"])
        .passes()
        .stdout_eq("logs/train_0.log\nlogs/train_1.log\nlogs/train_2.log\n");

    for id in 0..3 {
        assert_eq!(
            work.messages(&format!("logs/train_{id}.log")),
            worker_messages(id, 2)
        );
    }
}

#[test]
fn run_records_launch_in_the_base_log() {
    let work = Workdir::new();

    work.wl()
        .args(&["run", "-n", "2", "--log", "train.log", "--messages", "1"])
        .passes();

    assert_eq!(
        work.messages("train.log"),
        vec!["Launching 2 worker(s)", "All workers finished"]
    );
}

#[test]
fn run_aggregate_merges_every_worker_line() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "run", "-n", "2", "--log", "train.log", "--messages", "3", "--aggregate", "all.log",
        ])
        .passes()
        .stdout_has("Aggregated 10 record(s) from 2 file(s) into all.log");

    let merged: Vec<String> = work.read("all.log").lines().map(String::from).collect();
    assert_eq!(merged.len(), 10);
    for id in 0..2 {
        let ours: Vec<String> = merged
            .iter()
            .filter(|m| {
                m.starts_with(&format!("Worker {id}: ")) || **m == format!("Worker ID set: {id}")
            })
            .cloned()
            .collect();
        assert_eq!(ours, worker_messages(id, 3));
    }
}

#[test]
fn run_json_lists_log_files() {
    let work = Workdir::new();

    let run = work
        .wl()
        .args(&["-o", "json", "run", "-n", "2", "--log", "job.log", "--messages", "1"])
        .passes();

    let json = run.json();
    assert_eq!(
        json["log_files"],
        serde_json::json!(["job_0.log", "job_1.log"])
    );
    assert!(json.get("aggregate").is_none());
}

#[test]
fn run_custom_program_gets_launch_environment() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "run",
            "-n",
            "2",
            "--log",
            "custom.log",
            "--",
            "/bin/sh",
            "-c",
            r#"echo "2026-01-01T00:00:00.000Z - id=$WL_WORKER_ID base=$WL_LOG_BASE" > "$WL_LOG_FILE""#,
        ])
        .passes();

    assert_eq!(work.messages("custom_0.log"), vec!["id=0 base=custom.log"]);
    assert_eq!(work.messages("custom_1.log"), vec!["id=1 base=custom.log"]);
}

#[test]
fn run_failed_worker_does_not_fail_the_run() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "run",
            "-n",
            "2",
            "--log",
            "flaky.log",
            "--aggregate",
            "all.log",
            "--",
            "/bin/sh",
            "-c",
            r#"[ "$WL_WORKER_ID" = 0 ] && exit 1; echo "2026-01-01T00:00:00.000Z - survivor" > "$WL_LOG_FILE""#,
        ])
        .passes()
        .stdout_has("Aggregated 1 record(s) from 1 file(s) into all.log");

    assert_eq!(work.read("all.log"), "survivor\n");
}

#[test]
fn run_with_metrics_interleaves_metric_lines() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "run", "-n", "2", "--log", "m.log", "--messages", "20", "--metrics",
        ])
        .passes();

    for id in 0..2 {
        let msgs = work.messages(&format!("m_{id}.log"));
        assert_eq!(msgs[0], format!("Worker ID set: {id}"));
        assert!(msgs[1..]
            .iter()
            .all(|m| m.starts_with(&format!("Worker {id}: "))));
        assert!(
            msgs.iter().any(|m| m.contains(": CPU Usage: ")),
            "no metrics in worker {id}: {msgs:?}"
        );
        assert!(msgs.iter().any(|m| m.contains(": Disk I/O (Reads: ")));
    }
}

#[test]
fn run_missing_program_fails() {
    let work = Workdir::new();

    work.wl()
        .args(&["run", "-n", "1", "--log", "x.log", "--", "./no-such-program"])
        .fails()
        .stderr_has("Error: failed to spawn worker 0");
}
