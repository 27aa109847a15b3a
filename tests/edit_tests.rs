use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_rows, init_db_with_data, rti, setup_test_db};

#[test]
fn test_edit_with_confirm_relabels_history() {
    let db_path = setup_test_db("edit_confirm");
    init_db_with_data(&db_path);

    rti()
        .args([
            "--db", &db_path, "edit", "101", "--new-id", "909", "--new-name", "Ravi K", "--confirm",
        ])
        .assert()
        .success()
        .stdout(contains("Worker found: 101 - Ravi").and(contains("Updated 2 rows")));

    assert_eq!(
        count_rows(&db_path, "SELECT COUNT(*) FROM daily WHERE worker_id = '101'"),
        0
    );
    assert_eq!(
        count_rows(
            &db_path,
            "SELECT COUNT(*) FROM daily WHERE worker_id = '909' AND name = 'Ravi K'"
        ),
        2
    );

    rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .assert()
        .success()
        .stdout(contains("909 - Ravi K"));
}

#[test]
fn test_edit_keeps_unspecified_values() {
    let db_path = setup_test_db("edit_name_only");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "edit", "202", "--new-name", "Anil S", "--confirm"])
        .assert()
        .success();

    assert_eq!(
        count_rows(
            &db_path,
            "SELECT COUNT(*) FROM daily WHERE worker_id = '202' AND name = 'Anil S'"
        ),
        2
    );
}

#[test]
fn test_edit_declined_changes_nothing() {
    let db_path = setup_test_db("edit_declined");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "edit", "101", "--new-id", "909"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Please confirm"));

    assert_eq!(
        count_rows(&db_path, "SELECT COUNT(*) FROM daily WHERE worker_id = '101'"),
        2
    );
}

#[test]
fn test_edit_unknown_worker() {
    let db_path = setup_test_db("edit_unknown");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "edit", "555", "--new-id", "1", "--confirm"])
        .assert()
        .failure()
        .stderr(contains("Worker ID not found: 555"));
}
