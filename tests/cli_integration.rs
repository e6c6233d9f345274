use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn stockpad(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpad").unwrap();
    cmd.env("STOCKPAD_HOME", home)
        .env_remove("STOCKPAD_LOG")
        .arg("--no-color");
    cmd
}

/// A data directory that starts without the sample dataset.
fn empty_home() -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"seed_sample_data": false}"#,
    )
    .unwrap();
    temp_dir
}

#[test]
fn test_first_run_seeds_sample_data() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpad(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("Premium Arabica Coffee"))
        .stdout(predicate::str::contains("Rp 313.765.000"));

    assert!(temp_dir.path().join("inventory.json").exists());
    assert!(temp_dir.path().join("categories.json").exists());
}

#[test]
fn test_add_list_and_show() {
    let temp_dir = empty_home();
    let home = temp_dir.path();

    stockpad(home)
        .args(["category-add", "Stationery", "--icon", "✏️"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category added (#1)"));

    stockpad(home)
        .args([
            "add",
            "ATK001",
            "Pilot Pen",
            "Stationery",
            "--stock",
            "3",
            "--min-stock",
            "20",
            "--price",
            "5000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added (#1): Pilot Pen"));

    stockpad(home)
        .args(["list", "--search", "atk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pilot Pen"))
        .stdout(predicate::str::contains("Low stock"));

    stockpad(home)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 15.000"))
        .stdout(predicate::str::contains("min 20"));
}

#[test]
fn test_list_filter_without_matches() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpad(temp_dir.path())
        .args(["list", "--search", "no-such-thing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items match."));
}

#[test]
fn test_add_to_unknown_category_fails() {
    let temp_dir = empty_home();

    stockpad(temp_dir.path())
        .args(["add", "X1", "Widget", "Gadgets", "--stock", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Gadgets"));
}

#[test]
fn test_update_and_missing_item() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    stockpad(home)
        .args(["update", "3", "--stock", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated (#3): Pilot Pen"));

    stockpad(home)
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In stock"));

    stockpad(home)
        .args(["update", "99", "--stock", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: 99"));
}

#[test]
fn test_delete_prompts_unless_yes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    stockpad(home)
        .args(["delete", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete \"Pilot Pen\"?"))
        .stdout(predicate::str::contains("Delete cancelled."));

    stockpad(home)
        .args(["delete", "3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item deleted (#3): Pilot Pen"));

    stockpad(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pilot Pen").not());
}

#[test]
fn test_category_in_use_cannot_be_deleted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    stockpad(home)
        .args(["category-delete", "4", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category 'Food' still has 1 item(s)"));

    stockpad(home)
        .args(["delete", "5", "--yes"])
        .assert()
        .success();

    stockpad(home)
        .args(["category-delete", "4", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category deleted (#4): Food"));

    stockpad(home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_report() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpad(temp_dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pilot Pen (3 left)"))
        .stdout(predicate::str::contains("Electronics"))
        .stdout(predicate::str::contains("188"));
}

#[test]
fn test_theme_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    stockpad(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    stockpad(home)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    stockpad(home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
}

#[test]
fn test_config_controls_dashboard() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    stockpad(home)
        .args(["config", "recent-limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-limit set to 1"));

    stockpad(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-limit = 1"))
        .stdout(predicate::str::contains("currency-symbol = Rp"));

    stockpad(home)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Arabica Coffee"))
        .stdout(predicate::str::contains("Pilot Pen").not());

    stockpad(home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_corrupt_inventory_loads_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    // First boot writes the sample data to disk.
    stockpad(home).assert().success();
    std::fs::write(home.join("inventory.json"), "{ not json").unwrap();

    stockpad(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items yet"))
        .stderr(predicate::str::contains("inventory"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    stockpad(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .arg("categories")
        .assert()
        .success();

    assert!(flag_home.path().join("categories.json").exists());
    assert!(!env_home.path().join("categories.json").exists());
}
