use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_db, init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(
            contains("Entries")
                .and(contains("2024-03-04"))
                .and(contains("2024-03-05"))
                .and(contains("Integrity check passed"))
                .and(contains("Vacuum completed")),
        );
}

#[test]
fn test_log_lists_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("entry (2024-03-05)")));
}

#[test]
fn test_log_empty() {
    let db_path = setup_test_db("log_empty");
    rusqlite::Connection::open(&db_path).expect("create db");

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("The internal log is empty"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db(&db_path);

    let out = temp_out("backup_plain", "sqlite");
    rti()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&out).exists());

    let packed_src = temp_out("backup_packed", "sqlite");
    let packed = if cfg!(target_os = "windows") {
        Path::new(&packed_src).with_extension("zip")
    } else {
        Path::new(&format!("{packed_src}.tar.gz")).to_path_buf()
    };
    std::fs::remove_file(&packed).ok();

    rti()
        .args(["--db", &db_path, "backup", "--file", &packed_src, "--compress"])
        .assert()
        .success();
    assert!(packed.exists());
    assert!(!Path::new(&packed_src).exists());
}

#[test]
fn test_backup_requires_absolute_path() {
    let db_path = setup_test_db("backup_relative");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "backup", "--file", "copy.sqlite"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_config_print() {
    rti()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("history_limit").and(contains("accent_color")));
}

/// Fresh home directory holding a config file that does not parse.
#[cfg(unix)]
fn home_with_broken_config(name: &str) -> std::path::PathBuf {
    let home = std::env::temp_dir().join(format!("effchart_home_{name}"));
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(home.join(".effchart")).unwrap();
    std::fs::write(home.join(".effchart/effchart.conf"), "history_limit: [\n").unwrap();
    home
}

#[cfg(unix)]
#[test]
fn test_broken_config_still_allows_config_and_init() {
    let home = home_with_broken_config("broken_cfg");
    let db_path = setup_test_db("broken_cfg");

    rti()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("using default settings").and(contains("history_limit: 6")));

    rti()
        .env("HOME", &home)
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));

    rti()
        .env("HOME", &home)
        .args(["--db", &db_path, "init"])
        .assert()
        .success();

    rti()
        .env("HOME", &home)
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}
