mod common;
use common::{ENTRIES_HEADER, STAFFPLAN_HEADER, eb, init_db_with_data, setup_test_db, temp_out, write_fixture};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_entries_csv_all() {
    let db_path = setup_test_db("export_entries_csv_all");
    init_db_with_data("export_entries_csv_all", &db_path);

    let out = temp_out("export_entries_csv_all", "csv");

    eb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("raw"));
}

#[test]
fn test_export_json_range_filters_days() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data("export_json_range", &db_path);

    let out = temp_out("export_json_range", "json");

    eb().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2025-09-01:2025-09-10",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_csv_applies_staffplan_override() {
    let db_path = setup_test_db("export_csv_staffplan");
    init_db_with_data("export_csv_staffplan", &db_path);

    // Later plan revision for the same employee/day must win.
    let plan = format!(
        "{}{}{}",
        STAFFPLAN_HEADER,
        "anna,2025-09-01,,,PLAN-ALT,,,\n",
        "anna,2025-09-01,,,PLAN-NEU,,CPO-9,\n"
    );
    let plan_csv = write_fixture("export_csv_staffplan_plan", &plan);
    eb().args(["--db", &db_path, "staffplan", "--file", &plan_csv])
        .assert()
        .success();

    let out = temp_out("export_csv_staffplan", "csv");
    eb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("PLAN-NEU"));
    assert!(!content.contains("PLAN-ALT"));
    assert!(content.contains("staffplan"));
    // The untouched day keeps its raw provenance.
    assert!(content.contains("raw"));
}

#[test]
fn test_export_raw_skips_overrides() {
    let db_path = setup_test_db("export_raw");
    init_db_with_data("export_raw", &db_path);

    let plan = format!("{}{}", STAFFPLAN_HEADER, "anna,2025-09-01,,,PLAN-NEU,,,\n");
    let plan_csv = write_fixture("export_raw_plan", &plan);
    eb().args(["--db", &db_path, "staffplan", "--file", &plan_csv])
        .assert()
        .success();

    let out = temp_out("export_raw", "csv");
    eb().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--raw", "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("PLAN-NEU"));
    assert!(!content.contains("staffplan"));
}

#[test]
fn test_export_pdf_writes_document() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_data("export_pdf", &db_path);

    let out = temp_out("export_pdf", "pdf");

    eb().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "pdf",
        "--file",
        &out,
        "--range",
        "2025-09",
        "--group-by",
        "week",
        "--title",
        "Erfassungsbogen September",
        "--force",
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_pdf_empty_range_still_renders() {
    let db_path = setup_test_db("export_pdf_empty");
    init_db_with_data("export_pdf_empty", &db_path);

    let out = temp_out("export_pdf_empty", "pdf");

    eb().args([
        "--db", &db_path, "export", "--format", "pdf", "--file", &out, "--range", "2030-01",
        "--force",
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_pdf_missing_logo_is_skipped() {
    let db_path = setup_test_db("export_pdf_logo");
    init_db_with_data("export_pdf_logo", &db_path);

    let out = temp_out("export_pdf_logo", "pdf");

    eb().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "pdf",
        "--file",
        &out,
        "--logo",
        "/does/not/exist.jpg",
        "--force",
    ])
    .assert()
    .success();

    assert!(fs::read(&out).expect("read exported pdf").starts_with(b"%PDF-"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data("export_relative", &db_path);

    eb().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
        "--force",
    ])
    .assert()
    .failure();
}

#[test]
fn test_list_shows_reconciled_entries() {
    let db_path = setup_test_db("list_reconciled");
    init_db_with_data("list_reconciled", &db_path);

    let plan = format!("{}{}", STAFFPLAN_HEADER, "anna,2025-09-01,,,PLAN-NEU,,,\n");
    let plan_csv = write_fixture("list_reconciled_plan", &plan);
    eb().args(["--db", &db_path, "staffplan", "--file", &plan_csv])
        .assert()
        .success();

    eb().args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLAN-NEU"))
        .stdout(predicate::str::contains("Σ Total"));
}

#[test]
fn test_import_rejects_invalid_date() {
    let db_path = setup_test_db("import_invalid_date");
    eb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let entries = format!("{}{}", ENTRIES_HEADER, "anna,01.09.2025,,,WEB,,,,Task,60\n");
    let csv = write_fixture("import_invalid_date", &entries);

    eb().args(["--db", &db_path, "import", "--file", &csv])
        .assert()
        .failure();
}
