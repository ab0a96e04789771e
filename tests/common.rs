#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("doorlogger")
}

/// Per-test pair of resource paths inside the system temp dir.
pub struct TestPaths {
    pub db: String,
    pub status: String,
}

/// Create unique DB and status-file paths and remove any leftovers.
pub fn setup(name: &str) -> TestPaths {
    let mut db: PathBuf = env::temp_dir();
    db.push(format!("{}_doorlogger.sqlite", name));
    let mut status: PathBuf = env::temp_dir();
    status.push(format!("{}_doorlogger_status.json", name));

    fs::remove_file(&db).ok();
    fs::remove_file(&status).ok();

    TestPaths {
        db: db.to_string_lossy().to_string(),
        status: status.to_string_lossy().to_string(),
    }
}

/// Run `init` against the test paths (test mode, no user config touched).
pub fn init(paths: &TestPaths) {
    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "init",
    ])
    .assert()
    .success();
}

/// Deliver one edge against the test paths.
pub fn signal(paths: &TestPaths, edge: &str) -> assert_cmd::assert::Assert {
    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "signal",
        edge,
    ])
    .assert()
}
