use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{dl, init, setup, signal};

#[test]
fn test_init_creates_database_and_snapshot() {
    let paths = setup("init_creates");

    init(&paths);

    assert!(Path::new(&paths.db).exists());
    assert!(Path::new(&paths.status).exists());

    // the seeded snapshot is the zero default in front-end format
    let raw = fs::read_to_string(&paths.status).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["current_status"]["isOpen"], 0);
    assert_eq!(v["current_status"]["lastOpened"], 0);
    assert_eq!(v["current_status"]["lastClosed"], 0);
}

#[test]
fn test_open_then_close_records_one_interval() {
    let paths = setup("open_close_cycle");
    init(&paths);

    signal(&paths, "opened")
        .success()
        .stdout(contains("Door opened"));

    signal(&paths, "closed")
        .success()
        .stdout(contains("[SAVED]"))
        .stdout(contains("Door closed"));

    dl().args(["--db", &paths.db, "--status-file", &paths.status, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("1 opening(s)"));

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "status",
    ])
    .assert()
    .success()
    .stdout(contains("Door is CLOSED"));
}

#[test]
fn test_close_without_open_is_a_noop() {
    let paths = setup("close_first");
    init(&paths);

    signal(&paths, "closed")
        .success()
        .stdout(contains("opening time not found"));

    dl().args(["--db", &paths.db, "--status-file", &paths.status, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("0 opening(s)"));

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "status",
    ])
    .assert()
    .success()
    .stdout(contains("Door is CLOSED"));
}

#[test]
fn test_double_close_logs_only_once() {
    let paths = setup("double_close");
    init(&paths);

    signal(&paths, "opened").success();
    signal(&paths, "closed").success().stdout(contains("[SAVED]"));
    signal(&paths, "closed")
        .success()
        .stdout(contains("already closed"));

    dl().args(["--db", &paths.db, "--status-file", &paths.status, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("1 opening(s)"));
}

#[test]
fn test_status_reports_open_door() {
    let paths = setup("status_open");
    init(&paths);

    signal(&paths, "opened").success();

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "status",
    ])
    .assert()
    .success()
    .stdout(contains("Door is OPEN"));
}

#[test]
fn test_invalid_edge_is_rejected() {
    let paths = setup("invalid_edge");
    init(&paths);

    signal(&paths, "banana")
        .failure()
        .stderr(contains("Invalid signal"));
}

#[test]
fn test_malformed_snapshot_is_fatal() {
    let paths = setup("malformed_snapshot");
    init(&paths);

    fs::write(&paths.status, "{broken json").unwrap();

    signal(&paths, "opened")
        .failure()
        .stderr(contains("Status snapshot unreadable"));
}

#[test]
fn test_watch_consumes_edges_from_stdin() {
    let paths = setup("watch_stdin");
    init(&paths);

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "watch",
    ])
    .write_stdin("opened\nnonsense\nclosed\n")
    .assert()
    .success()
    .stdout(contains("[SAVED]"))
    .stdout(contains("Ignoring unknown edge"));

    dl().args(["--db", &paths.db, "--status-file", &paths.status, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("1 opening(s)"));
}

#[test]
fn test_history_lists_recorded_dates() {
    let paths = setup("history_dates");
    init(&paths);

    signal(&paths, "opened").success();
    signal(&paths, "closed").success();

    let today = chrono::Local::now().format("%d-%m-%Y").to_string();

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "history",
    ])
    .assert()
    .success()
    .stdout(contains(today));
}

#[test]
fn test_internal_log_records_operations() {
    let paths = setup("internal_log");
    init(&paths);

    signal(&paths, "opened").success();
    signal(&paths, "closed").success();

    dl().args([
        "--db",
        &paths.db,
        "--status-file",
        &paths.status,
        "--test",
        "log",
        "--print",
    ])
    .assert()
    .success()
    // init row: target is the database path, message stays descriptive
    .stdout(contains(format!("| {} | Database initialized", paths.db)))
    .stdout(contains("interval"));
}
