//! End-to-end tests for the layak binary
//!
//! Each test runs against its own temp data directory via LAYAK_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn layak(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("layak").unwrap();
    cmd.env("LAYAK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn shows_help_without_subcommand() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("layak --help"));
}

#[test]
fn init_creates_settings() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["init", "--city", "yogyakarta", "--role", "student"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(tmp.path().join("config.json").exists());

    layak(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Yogyakarta"))
        .stdout(predicate::str::contains("Student"));
}

#[test]
fn cities_lists_reference_data() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jakarta"))
        .stdout(predicate::str::contains("Cirebon"))
        .stdout(predicate::str::contains("Rp4.800.000"));
}

#[test]
fn simulate_defaults_to_deficit_in_jakarta() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["simulate", "--city", "jakarta", "--role", "worker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Defisit"));
}

#[test]
fn simulate_rejects_out_of_range_cost() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["simulate", "--city", "jakarta", "--set", "housing=100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn simulate_applies_named_event() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args([
            "simulate",
            "--city",
            "cirebon",
            "--role",
            "worker",
            "--event",
            "bonus-job",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kerjaan Sampingan"))
        .stdout(predicate::str::contains("Rp3.500.000"));
}

#[test]
fn ledger_income_and_summary() {
    let tmp = TempDir::new().unwrap();

    layak(&tmp)
        .args(["ledger", "income", "juli", "2000000"])
        .assert()
        .success();

    layak(&tmp)
        .args([
            "ledger", "add", "juli", "1600000", "--category", "housing", "--date", "2026-07-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tempat Tinggal"));

    layak(&tmp)
        .args(["ledger", "summary", "juli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layak"))
        .stdout(predicate::str::contains("Rp400.000"));
}

#[test]
fn ledger_rejects_unknown_month() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["ledger", "income", "tridecember", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month"));
}

#[test]
fn ledger_delete_missing_expense_fails() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args([
            "ledger",
            "delete",
            "juli",
            "exp-deadbeef",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn ledger_insights_flag_dominant_category() {
    let tmp = TempDir::new().unwrap();

    layak(&tmp)
        .args(["ledger", "income", "juni", "3000000"])
        .assert()
        .success();
    layak(&tmp)
        .args([
            "ledger", "add", "juni", "2000000", "--category", "food", "--date", "2026-06-01",
        ])
        .assert()
        .success();
    layak(&tmp)
        .args([
            "ledger", "add", "juni", "1000000", "--category", "housing", "--date", "2026-06-02",
        ])
        .assert()
        .success();

    layak(&tmp)
        .args(["ledger", "insights", "juni"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makan mendominasi 67%"));
}

#[test]
fn choice_set_and_status() {
    let tmp = TempDir::new().unwrap();

    layak(&tmp)
        .args(["choice", "set", "juli", "saving-small"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Menabung kecil"));

    layak(&tmp)
        .args(["choice", "status", "juli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lebih Aman"));

    layak(&tmp)
        .args(["choice", "clear", "juli"])
        .assert()
        .success();

    layak(&tmp)
        .args(["choice", "status", "juli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Belum ada pilihan"));
}

#[test]
fn choice_rejects_unknown_id() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["choice", "set", "juli", "buy-lottery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown choice"));
}

#[test]
fn export_json_roundtrip() {
    let tmp = TempDir::new().unwrap();

    layak(&tmp)
        .args(["ledger", "income", "mei", "1500000"])
        .assert()
        .success();

    let out = tmp.path().join("backup.json");
    layak(&tmp)
        .args(["export", "all"])
        .arg(&out)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"schema_version\": \"1.0.0\""));
    assert!(contents.contains("\"mei\""));
}

#[test]
fn export_expenses_csv() {
    let tmp = TempDir::new().unwrap();

    layak(&tmp)
        .args([
            "ledger", "add", "april", "250000", "--category", "food", "--date", "2026-04-10",
        ])
        .assert()
        .success();

    let out = tmp.path().join("expenses.csv");
    layak(&tmp)
        .args(["export", "expenses"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Month,ID,Date,Category,Amount"));
    assert!(contents.contains("April"));
    assert!(contents.contains("250000"));
}

#[test]
fn event_list_shows_catalog() {
    let tmp = TempDir::new().unwrap();
    layak(&tmp)
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bonus-job"))
        .stdout(predicate::str::contains("health-emergency"))
        .stdout(predicate::str::contains("-Rp250.000"));
}
