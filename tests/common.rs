#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("heartline")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_heartline.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    hl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hl().args([
        "--db",
        db_path,
        "add",
        "2024-02-14",
        "Valentine dinner",
        "--score",
        "6",
    ])
    .assert()
    .success();

    hl().args([
        "--db",
        db_path,
        "add",
        "2024-01-05",
        "Argument about chores",
        "--score",
        "-3",
    ])
    .assert()
    .success();
}
