//! End-to-end tests driving the `expense-tracker` binary

use std::fs;

use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR")
        .current_dir(dir.path())
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, date: &str, category: &str) {
    tracker(dir)
        .args([
            "add",
            "--description",
            description,
            "--amount",
            amount,
            "--date",
            date,
            "--category",
            category,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully"));
}

#[test]
fn add_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expense added successfully (ID: 1)",
        ));
    tracker(&dir)
        .args(["add", "--description", "Dinner", "--amount", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expense added successfully (ID: 2)",
        ));

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn summary_follows_add_and_delete() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "20", "2025-08-14", "Food");
    add(&dir, "Dinner", "10", "2025-08-14", "Food");

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $30.00"));

    tracker(&dir)
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully"));

    tracker(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $20.00"));

    // Deleted IDs are never reused
    tracker(&dir)
        .args(["add", "--description", "Snack", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 3)"));
}

#[test]
fn budget_warning_when_month_exceeded() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "--set", "50", "--month", "8", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2025-08 set to $50.00"));

    tracker(&dir)
        .args([
            "add",
            "--description",
            "Groceries",
            "--amount",
            "40",
            "--date",
            "2025-08-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning").not());

    tracker(&dir)
        .args([
            "add",
            "--description",
            "Takeout",
            "--amount",
            "20",
            "--date",
            "2025-08-20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: budget for 2025-08 exceeded! Budget: $50.00, Spent: $60.00",
        ));

    tracker(&dir)
        .args(["budget", "--month", "8", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2025-08: $50.00"))
        .stdout(predicate::str::contains("Spent: $60.00, Remaining: -$10.00"));
}

#[test]
fn budget_read_and_clear() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "--month", "3", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for 2024-03"));

    tracker(&dir)
        .args(["budget", "--set", "0", "--month", "3", "--year", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    tracker(&dir)
        .args(["budget", "--set", "100", "--month", "3", "--year", "2024"])
        .assert()
        .success();

    tracker(&dir)
        .args(["budget", "--clear", "--month", "3", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 2024-03 cleared"));

    tracker(&dir)
        .args(["budget", "--month", "3", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for 2024-03"));
}

#[test]
fn update_with_non_positive_amount_changes_nothing() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "20", "2025-08-14", "Food");

    for amount in ["0", "-5"] {
        tracker(&dir)
            .args([
                "update",
                "--id",
                "1",
                "--amount",
                amount,
                "--description",
                "Brunch",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("Error: Validation error"));
    }

    tracker(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Brunch").not());
}

#[test]
fn update_applies_supplied_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "5", "2025-08-14", "Beverage");

    tracker(&dir)
        .args(["update", "--id", "1", "--amount", "7.50", "--category", "Cafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated successfully"));

    tracker(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Cafe"))
        .stdout(predicate::str::contains("$7.50"));

    tracker(&dir)
        .args(["history", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated expense #1 (Coffee)"))
        .stdout(predicate::str::contains("amount: $5.00 -> $7.50"));
}

#[test]
fn unknown_id_is_reported() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["delete", "--id", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expense not found: 42"));

    tracker(&dir)
        .args(["update", "--id", "42", "--amount", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "--description", "   ", "--amount", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    tracker(&dir)
        .args(["add", "--description", "Lunch", "--amount", "5", "--date", "2025-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    tracker(&dir)
        .args(["add", "--description", "Yacht", "--amount", "92233720368547758"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));

    tracker(&dir)
        .args(["list", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn list_filters_category_case_insensitively() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Bread", "3", "2025-08-01", "Food");
    add(&dir, "Bus", "2.50", "2025-08-02", "Transport");
    add(&dir, "Apples", "4", "2025-08-03", "FOOD");

    tracker(&dir)
        .args(["list", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Apples"))
        .stdout(predicate::str::contains("Bus").not())
        .stdout(predicate::str::contains("2 expenses, total $7.00"));

    tracker(&dir)
        .args(["list", "--category", "Nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn export_month_without_year_uses_current_year() {
    let dir = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let last_year = today.with_day(1).unwrap().with_year(today.year() - 1).unwrap();

    add(&dir, "This year", "12", &today.to_string(), "General");
    add(&dir, "Last year", "8", &last_year.to_string(), "General");

    let month = today.month().to_string();

    tracker(&dir)
        .args(["list", "--month", &month])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense, total $12.00"));

    tracker(&dir)
        .args(["export", "--output", "out.csv", "--month", &month])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 rows to out.csv"));

    let contents = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "id,date,description,category,amount");
    assert_eq!(lines[1], format!("1,{},This year,General,12.00", today));
}

#[test]
fn export_defaults_to_configured_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch, with team", "20", "2025-08-14", "Food");

    tracker(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 rows to expenses.csv"));

    let contents = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    assert!(contents.contains("\"Lunch, with team\""));
}

#[test]
fn summary_for_month_and_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Bread", "3", "2025-08-01", "Food");
    add(&dir, "Bus", "2.50", "2025-08-02", "Transport");
    add(&dir, "Cake", "6", "2025-07-30", "Food");

    tracker(&dir)
        .args(["summary", "--month", "8", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total expenses for August 2025: $5.50",
        ))
        .stdout(predicate::str::contains("Transport"));

    tracker(&dir)
        .args(["summary", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses (food): $9.00"));
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("expenses.json"), "{ not json").unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Corrupt store"));

    // The broken file is left for the user to inspect
    assert_eq!(
        fs::read_to_string(data.join("expenses.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn reads_legacy_store_format() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("expenses.json"),
        r#"{"next_id":0,"expenses":[{"id":1,"date":"2025-08-14","description":"Old","amount":12.5}],"budgets":null}"#,
    )
    .unwrap();

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("General"))
        .stdout(predicate::str::contains("$12.50"));

    tracker(&dir)
        .args(["add", "--description", "New", "--amount", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:     $"));

    let settings = fs::read_to_string(dir.path().join("data").join("config.json")).unwrap();
    assert!(settings.contains("\"default_export_file\": \"expenses.csv\""));
}

#[test]
fn data_dir_from_environment() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("expense-tracker")
        .unwrap()
        .env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();

    assert!(dir.path().join("expenses.json").exists());
}
