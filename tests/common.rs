#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eb() -> Command {
    cargo_bin_cmd!("erfassungsbogen")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_erfassungsbogen.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

pub const ENTRIES_HEADER: &str =
    "employee,day,project,project_id,project_short,customer,customer_po,internal_po,task,minutes\n";

pub const STAFFPLAN_HEADER: &str =
    "employee,day,project,project_id,project_short,customer,customer_po,internal_po\n";

/// Initialize DB and import a small dataset useful for many tests.
pub fn init_db_with_data(name: &str, db_path: &str) {
    eb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let entries = format!(
        "{}{}{}",
        ENTRIES_HEADER,
        "anna,2025-09-01,Website Relaunch,P-100,WEB,ACME GmbH,CPO-1,IPO-1,Frontend,480\n",
        "anna,2025-09-15,Website Relaunch,P-100,WEB,ACME GmbH,CPO-1,IPO-1,Review,90\n"
    );
    let csv = write_fixture(&format!("{}_entries", name), &entries);

    eb().args(["--db", db_path, "import", "--file", &csv])
        .assert()
        .success();
}
