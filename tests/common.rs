#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Two workers pasted from the spreadsheet: serial, id, name, role, work,
/// category, achieved, plus a trailing column that is ignored.
pub const PASTE: &str = "1\t101.0\tRavi\tTailor\tCollar\tA\t7.0\tx\n\
                         2\t202\tAnil\tTailor\tSleeve\tB\tabsent\n";

pub fn rti() -> Command {
    cargo_bin_cmd!("effchart")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_effchart.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Store `paste` for `date` through the CLI, reading it from stdin.
pub fn add_entries(db_path: &str, date: &str, paste: &str) {
    rti()
        .args(["--db", db_path, "entry", "--date", date])
        .write_stdin(paste)
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_entries(db_path, "2024-03-04", PASTE);
    add_entries(db_path, "2024-03-05", PASTE);
}

pub fn count_rows(db_path: &str, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(sql, [], |row| row.get(0)).expect("count")
}
