use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A data directory with the login delay turned off.
fn home() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"login-delay-ms": 0}"#).unwrap();
    dir
}

fn erpdash(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("erpdash").unwrap();
    cmd.env("ERPDASH_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn signed_in() -> TempDir {
    let dir = home();
    erpdash(dir.path())
        .args(["login", "admin@acme.com"])
        .assert()
        .success();
    dir
}

#[test]
fn login_with_demo_account() {
    let dir = home();
    erpdash(dir.path())
        .args(["login", "admin@acme.com", "--password", "demo123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Alex Morgan (admin)"));

    assert!(dir.path().join("erp-storage.json").exists());

    erpdash(dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Alex Morgan <admin@acme.com>"));
}

#[test]
fn wrong_password_fails_and_saves_nothing() {
    let dir = home();
    erpdash(dir.path())
        .args(["login", "admin@acme.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));

    assert!(!dir.path().join("erp-storage.json").exists());
}

#[test]
fn protected_commands_need_a_session() {
    let dir = home();
    erpdash(dir.path())
        .args(["list", "customers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn protected_page_redirects_to_login() {
    let dir = home();
    erpdash(dir.path())
        .args(["open", "/invoices"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sign in\n"))
        .stdout(predicate::str::contains("admin@acme.com"))
        .stderr(predicate::str::contains("Sign in to view /invoices"));
}

#[test]
fn unknown_page_is_an_error() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["open", "/nowhere"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Page not found"))
        .stderr(predicate::str::contains("Page not found: /nowhere"));
}

#[test]
fn list_customers_as_a_table() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["list", "customers", "--search", "wilson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cust-1"))
        .stdout(predicate::str::contains("James Wilson"))
        .stdout(predicate::str::contains("Linda Brooks").not())
        .stdout(predicate::str::contains("Showing 1 to 1 of 1 results"));
}

#[test]
fn list_selection_as_json() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["list", "customers", "--select", "cust-2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"cust-2\""))
        .stdout(predicate::str::contains("cust-1").not());
}

#[test]
fn add_update_delete_round() {
    let dir = signed_in();
    let home = dir.path();

    erpdash(home)
        .args([
            "add",
            "customers",
            r#"{"id": "cust-99", "name": "Jane Doe", "email": "jane@example.com", "status": "active", "totalSpent": 0}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added customers cust-99"));

    erpdash(home)
        .args(["update", "customers", "cust-99", r#"{"phone": "+1 555 0199"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 field changed"));

    erpdash(home)
        .args(["show", "customers", "cust-99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+1 555 0199"));

    erpdash(home)
        .args(["delete", "customers", "cust-99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted customers cust-99"));

    erpdash(home)
        .args(["delete", "customers", "cust-99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing changed"));

    erpdash(home)
        .args(["show", "customers", "cust-99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No customers with id cust-99"));

    let saved = fs::read_to_string(home.join("erp-storage.json")).unwrap();
    assert!(saved.contains("\"auditLogs\""));
}

#[test]
fn invalid_json_is_reported() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["add", "customers", "{name:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn notifications_can_be_marked_read() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["read", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 3 notifications as read"));

    erpdash(dir.path())
        .args(["notifications", "--unread"])
        .assert()
        .success();
}

#[test]
fn palette_filters_by_label() {
    let dir = signed_in();
    erpdash(dir.path())
        .args(["palette", "invoice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create Invoice"))
        .stdout(predicate::str::contains("Dashboard").not());
}

#[test]
fn config_round_trip() {
    let dir = home();
    erpdash(dir.path())
        .args(["config", "page-size", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 25"));

    erpdash(dir.path())
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout("25\n");

    erpdash(dir.path())
        .args(["config", "page-size", "7"])
        .assert()
        .failure();
}

#[test]
fn paths_point_into_the_data_dir() {
    let dir = home();
    erpdash(dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("erp-storage.json"));
}

#[test]
fn grouped_help() {
    let dir = home();
    erpdash(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session:"))
        .stdout(predicate::str::contains("Records:"));
}

#[test]
fn unreadable_snapshot_suggests_reset() {
    let dir = home();
    fs::write(dir.path().join("erp-storage.json"), "not json").unwrap();
    erpdash(dir.path())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("erpdash reset"));

    erpdash(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo data restored (8 customers"));

    erpdash(dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}
