//! CLI smoke tests
//!
//! These run the built binary; nothing here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eeris(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eeris").unwrap();
    cmd.env("EERIS_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    eeris(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("admin"));
}

#[test]
fn test_config_reports_logged_out_session() {
    let temp = TempDir::new().unwrap();
    eeris(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged in"));

    // The first run materializes the settings file
    assert!(temp.path().join("config.json").exists());
}

#[test]
fn test_gated_commands_require_login() {
    let temp = TempDir::new().unwrap();
    eeris(&temp)
        .args(["receipts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("eeris login"));
}

#[test]
fn test_unknown_register_role_is_rejected() {
    let temp = TempDir::new().unwrap();
    eeris(&temp)
        .args(["register", "Jordan", "jordan@example.com", "--role", "manager"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown role"));
}

#[test]
fn test_expense_submit_validates_category() {
    let temp = TempDir::new().unwrap();
    eeris(&temp)
        .args([
            "expense",
            "submit",
            "--category",
            "Lodging",
            "--store",
            "Inn",
            "--item",
            "Night=120.00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}
