//! `wl worker` specs

use crate::prelude::*;

#[test]
fn worker_flags_pick_the_log_file() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "worker", "--log", "w.log", "--id", "9", "--messages", "2", "--interval-ms", "0",
        ])
        .passes()
        .stdout_eq("");

    assert!(!work.join("w.log").exists());
    assert_eq!(
        work.messages("w_9.log"),
        vec![
            "Worker ID set: 9",
            "Worker 9: Processing item 1/2",
            "Worker 9: Processing item 2/2",
            "Worker 9: Work complete",
        ]
    );
}

#[test]
fn worker_reads_the_launch_environment() {
    let work = Workdir::new();

    work.wl()
        .args(&["worker", "--messages", "1"])
        .env("WL_WORKER_ID", "gpu1")
        .env("WL_LOG_BASE", "runs/exp.log")
        .passes();

    assert_eq!(
        work.messages("runs/exp_gpu1.log").first().map(String::as_str),
        Some("Worker ID set: gpu1")
    );
}

#[test]
fn worker_rotates_under_a_small_size_limit() {
    let work = Workdir::new();

    work.wl()
        .args(&[
            "worker", "--log", "r.log", "--id", "0", "--messages", "50", "--interval-ms", "0",
        ])
        .env("WL_LOG_MAX_BYTES", "512")
        .env("WL_LOG_BACKUPS", "2")
        .passes();

    assert!(work.join("r_0.log.1").exists());
    assert!(work.join("r_0.log.2").exists());
    assert!(!work.join("r_0.log.3").exists());
    assert_eq!(
        work.messages("r_0.log").last().map(String::as_str),
        Some("Worker 0: Work complete")
    );
}
