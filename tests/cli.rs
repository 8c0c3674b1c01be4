use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", dir)
        .env_remove("RUST_LOG")
        .current_dir(dir);
    cmd
}

fn add(dir: &Path, description: &str, amount: &str, category: &str) {
    ledger(dir)
        .args(["add", description, amount, "-c", category])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));
}

fn stored_ids(dir: &Path) -> Vec<String> {
    let raw = fs::read_to_string(dir.join("expenses.dat")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["expenses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    ledger(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger --help"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Lunch", "12.50", "food");
    add(dir.path(), "Bus", "2.75", "2");

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("2 expense(s), total $15.25"));

    assert!(dir.path().join("expenses.dat").exists());
}

#[test]
fn test_list_empty_ledger() {
    let dir = TempDir::new().unwrap();
    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Lunch", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    ledger(dir.path())
        .args(["add", "--", "Refund", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(dir.path())
        .args(["add", "Planet", "92233720368547758"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed"));

    ledger(dir.path())
        .args(["add", "Nothing", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    ledger(dir.path())
        .args(["add", "   ", "5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join("expenses.dat").exists());
}

#[test]
fn test_unknown_category_becomes_other() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Gift", "20", "9");

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn test_search() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee beans", "14.00", "food");
    add(dir.path(), "Cinema", "11.00", "entertainment");

    ledger(dir.path())
        .args(["search", "COFFEE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 expense(s)"))
        .stdout(predicate::str::contains("Coffee beans"))
        .stdout(predicate::str::contains("Cinema").not());

    ledger(dir.path())
        .args(["search", "entertain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"));

    ledger(dir.path())
        .args(["search", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses match 'rent'."));

    ledger(dir.path())
        .args(["search", " "])
        .assert()
        .failure();
}

#[test]
fn test_delete_requires_long_prefix_and_force() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Taxi", "30.00", "transport");
    let id = stored_ids(dir.path()).remove(0);

    ledger(dir.path())
        .args(["delete", &id[..3]])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));

    ledger(dir.path())
        .args(["delete", &id[..6]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));
    assert_eq!(stored_ids(dir.path()).len(), 1);

    ledger(dir.path())
        .args(["delete", &id[..6], "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));
    assert!(stored_ids(dir.path()).is_empty());
}

#[test]
fn test_delete_unknown_id() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Taxi", "30.00", "transport");

    ledger(dir.path())
        .args(["delete", "zzzzzz", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    assert_eq!(stored_ids(dir.path()).len(), 1);
}

#[test]
fn test_category_report() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Groceries", "75.00", "food");
    add(dir.path(), "Fuel", "25.00", "transport");

    ledger(dir.path())
        .arg("category")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("75.0%"))
        .stdout(predicate::str::contains("25.0%"))
        .stdout(predicate::str::contains("$100.00"));

    ledger(dir.path())
        .args(["category", "transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport expenses:"))
        .stdout(predicate::str::contains("Fuel"));

    ledger(dir.path())
        .args(["category", "bills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses in Bills."));

    add(dir.path(), "Gift card", "10.00", "9");
    ledger(dir.path())
        .args(["category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No category named 'Groceries'."))
        .stdout(predicate::str::contains("Gift card").not());
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Rent", "900.00", "bills");
    add(dir.path(), "Snack", "3.00", "food");

    ledger(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses:   2"))
        .stdout(predicate::str::contains("Total spent:      $903.00"))
        .stdout(predicate::str::contains("Average expense:  $451.50"))
        .stdout(predicate::str::contains("Last 7 days:      2 expense(s)"))
        .stdout(predicate::str::contains("Monthly breakdown"))
        .stdout(predicate::str::contains("Top categories"));
}

#[test]
fn test_stats_empty() {
    let dir = TempDir::new().unwrap();
    ledger(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Dinner \"fancy\", downtown", "48.20", "food");

    ledger(dir.path())
        .args(["export", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    let csv = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("ID,Description,Amount,Category,Date"));
    let row = lines.next().unwrap();
    assert!(row.contains("\"Dinner \"\"fancy\"\", downtown\",48.20,Food,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_default_name() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Book", "9.99", "shopping");

    ledger(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses_"));

    let exported: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("expenses_") && name.ends_with(".csv"))
        .collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn test_corrupt_ledger_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.dat"), "not a ledger").unwrap();

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."))
        .stderr(predicate::str::contains("starting fresh"));
}

#[test]
fn test_config_init() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Ledger Configuration"))
        .stdout(predicate::str::contains("Recent window:     7 days"));

    assert!(dir.path().join("ledger.json").exists());
}

#[test]
fn test_config_survives_invalid_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ledger.json"), r#"{"recent_window_days": 0}"#).unwrap();

    ledger(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger file:"))
        .stdout(predicate::str::contains("Settings file is invalid"));

    ledger(dir.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("recent_window_days"));
}
