use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_entries, init_db, init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_report_on_screen() {
    let db_path = setup_test_db("report_screen");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .assert()
        .success()
        .stdout(
            contains("101 - Ravi")
                .and(contains("202 - Anil"))
                .and(contains("05-03-2024"))
                .and(contains("04-03-2024"))
                .and(contains(" 7 "))
                .and(contains("absent"))
                .and(contains("Achieved"))
                .and(contains("Target").not())
                .and(contains("7.0").not()),
        );
}

#[test]
fn test_redirected_report_has_no_escape_codes() {
    let db_path = setup_test_db("report_plain");
    init_db_with_data(&db_path);

    let out = rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .output()
        .expect("run report");
    let text = String::from_utf8_lossy(&out.stdout);

    assert!(text.contains(" Date "));
    assert!(!text.contains('\u{1b}'), "escape codes in piped output: {text:?}");
}

#[test]
fn test_report_is_repeatable() {
    let db_path = setup_test_db("report_repeat");
    init_db_with_data(&db_path);

    let run = || {
        rti()
            .args(["--db", &db_path, "report", "--date", "2024-03-31"])
            .output()
            .expect("run report")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_report_cutoff_and_filter() {
    let db_path = setup_test_db("report_filter");
    init_db_with_data(&db_path);
    add_entries(&db_path, "2024-03-20", "1\t303\tSita\tHelper\tCut\tA\t2\n");

    rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains("Sita").not());

    rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-31", "--id", "202"])
        .assert()
        .success()
        .stdout(contains("202 - Anil").and(contains("Ravi").not()));
}

#[test]
fn test_report_without_records() {
    let db_path = setup_test_db("report_empty");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "report", "--date", "2024-03-31"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_report_pdf_to_file() {
    let db_path = setup_test_db("report_pdf");
    init_db_with_data(&db_path);
    let out = temp_out("report_pdf", "pdf");

    rti()
        .args([
            "--db", &db_path, "report", "--date", "2024-03-05", "--pdf", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
    let has = |s: &str| bytes.windows(s.len()).any(|w| w == s.as_bytes());
    assert!(has("(101 - Ravi | Report date: 05-03-2024) Tj"));
    assert!(has("(Target) Tj"));
}

#[test]
fn test_report_pdf_into_directory_uses_default_name() {
    let db_path = setup_test_db("report_pdf_dir");
    init_db_with_data(&db_path);

    let dir = std::env::temp_dir().join("effchart_report_pdf_dir");
    fs::create_dir_all(&dir).unwrap();
    let expected = dir.join("Daily_Report_2024-03-05.pdf");
    fs::remove_file(&expected).ok();

    rti()
        .args([
            "--db",
            &db_path,
            "report",
            "--date",
            "2024-03-05",
            "--pdf",
            "--out",
            dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(expected.exists());
}

#[test]
fn test_report_pdf_without_records_still_written() {
    let db_path = setup_test_db("report_pdf_empty");
    init_db(&db_path);
    let out = temp_out("report_pdf_empty", "pdf");

    rti()
        .args([
            "--db", &db_path, "report", "--date", "2024-03-05", "--pdf", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(fs::read(&out).expect("read pdf").starts_with(b"%PDF"));
}
