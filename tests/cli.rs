use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn init_demo(dir: &TempDir) {
    tally(dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo data loaded"));
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["category", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema file not found"));
}

#[test]
fn init_writes_schema_and_settings() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database: "))
        .stdout(predicate::str::contains("tally.db"));

    assert!(dir.path().join("schema.sql").exists());
    assert!(dir.path().join("config.json").exists());

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:       true"));
}

#[test]
fn demo_budget_report_flags_overspending() {
    let dir = TempDir::new().unwrap();
    init_demo(&dir);

    tally(&dir)
        .args(["report", "budget", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("$320.50"))
        .stdout(predicate::str::contains("OVER BUDGET"))
        .stdout(predicate::str::contains("1 of 2 categories over budget"));
}

#[test]
fn second_demo_seed_is_skipped() {
    let dir = TempDir::new().unwrap();
    init_demo(&dir);

    tally(&dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo data skipped"));
}

#[test]
fn record_and_list_through_subcommands() {
    let dir = TempDir::new().unwrap();
    tally(&dir).arg("init").assert().success();

    tally(&dir)
        .args(["category", "add", "  Food  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Food"));

    tally(&dir)
        .args(["expense", "add", "12.50", "Food", "--date", "2025-02-01", "-m", "Lunch"])
        .assert()
        .success();

    tally(&dir)
        .args(["report", "ledger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-01"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_demo(&dir);

    tally(&dir)
        .args(["expense", "add", "abc", "Groceries", "--date", "2025-01-20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    tally(&dir)
        .args(["budget", "set", "2025-01", "Rent", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Rent"));

    tally(&dir)
        .args(["category", "add", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists"));
}

#[test]
fn report_exports_land_in_reports_dir() {
    let dir = TempDir::new().unwrap();
    init_demo(&dir);

    tally(&dir)
        .args(["report", "totals", "--csv", "totals.csv", "--document", "totals.txt"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(dir.path().join("reports/totals.csv")).unwrap();
    assert_eq!(
        csv,
        "Category,Total Spent\nGroceries,320.50\nTransport,20.00\n"
    );

    let document = std::fs::read_to_string(dir.path().join("reports/totals.txt")).unwrap();
    assert!(document.contains("Page 1 of 1"));
}

#[test]
fn menu_runs_until_exit() {
    let dir = TempDir::new().unwrap();
    tally(&dir).arg("init").assert().success();

    tally(&dir)
        .arg("menu")
        .write_stdin("1\nFood\n4\n1\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category 'Food' added."))
        .stdout(predicate::str::contains("No expenses recorded."))
        .stdout(predicate::str::contains("Goodbye."));
}
