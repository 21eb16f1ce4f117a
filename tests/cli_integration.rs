//! Integration tests for the Passman CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passwords come from `PASSMAN_PASSWORD` / `PASSMAN_NEW_PASSWORD`, every
//! item field is passed as a flag and confirmations use `--force`, so no
//! interactive prompt is ever reached.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASSWORD: &str = "correct-horse";

/// Helper: a Command for the passman binary, run inside `dir` with the
/// account password preset.
fn passman(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passman").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("PASSMAN_USER")
        .env_remove("PASSMAN_DATA_FILE")
        .env_remove("PASSMAN_NEW_PASSWORD")
        .env_remove("RUST_LOG")
        .env("PASSMAN_PASSWORD", PASSWORD);
    cmd
}

/// Helper: a temp dir with `alice` registered and one item stored.
fn with_alice() -> TempDir {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .args(["register", "--user", "alice"])
        .assert()
        .success();
    passman(&dir)
        .args([
            "add", "email", "--user", "alice", "--website", "mail.com", "--login", "alice",
            "--password", "secret",
        ])
        .assert()
        .success();
    dir
}

#[test]
fn help_flag_shows_usage() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local password vault"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("remove-user"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("menu"));
}

#[test]
fn version_flag_shows_version() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passman"));
}

#[test]
fn no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn register_creates_data_file() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .args(["register", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered user 'alice'"));

    dir.child("data.dat").assert(predicate::path::exists());
}

#[test]
fn register_twice_fails() {
    let dir = with_alice();
    passman(&dir)
        .args(["register", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn register_rejects_short_password() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .env("PASSMAN_PASSWORD", "short")
        .args(["register", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));

    dir.child("data.dat").assert(predicate::path::missing());
}

#[test]
fn get_prints_full_record() {
    let dir = with_alice();
    passman(&dir)
        .args(["get", "email", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mail.com"))
        .stdout(predicate::str::contains("secret"));
}

#[test]
fn list_masks_passwords_by_default() {
    let dir = with_alice();
    passman(&dir)
        .args(["list", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn list_reveals_passwords_when_configured() {
    let dir = with_alice();
    dir.child(".passman.toml")
        .write_str("reveal_passwords = true\n")
        .unwrap();

    passman(&dir)
        .args(["list", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret"));
}

#[test]
fn wrong_password_is_rejected() {
    let dir = with_alice();
    passman(&dir)
        .env("PASSMAN_PASSWORD", "wrong-password")
        .args(["list", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid password"));
}

#[test]
fn unknown_user_is_rejected() {
    let dir = with_alice();
    passman(&dir)
        .args(["list", "--user", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username 'bob'"));
}

#[test]
fn duplicate_item_is_rejected() {
    let dir = with_alice();
    passman(&dir)
        .args([
            "add", "email", "--user", "alice", "--website", "x", "--login", "y", "--password",
            "z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 'email' already exists"));
}

#[test]
fn edit_changes_only_given_fields() {
    let dir = with_alice();
    passman(&dir)
        .args(["edit", "email", "--user", "alice", "--password", "secret2"])
        .assert()
        .success();

    passman(&dir)
        .args(["get", "email", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret2"))
        .stdout(predicate::str::contains("mail.com"));
}

#[test]
fn edit_rename_collision_is_rejected() {
    let dir = with_alice();
    passman(&dir)
        .args([
            "add", "bank", "--user", "alice", "--website", "bank.com", "--login", "a",
            "--password", "b",
        ])
        .assert()
        .success();

    passman(&dir)
        .args(["edit", "bank", "--user", "alice", "--rename", "email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn edit_without_changes_fails() {
    let dir = with_alice();
    passman(&dir)
        .args(["edit", "email", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn delete_then_get_is_not_found() {
    let dir = with_alice();
    passman(&dir)
        .args(["delete", "email", "--user", "alice", "--force"])
        .assert()
        .success();

    passman(&dir)
        .args(["get", "email", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 'email' not found"));
}

#[test]
fn search_filters_by_substring() {
    let dir = with_alice();
    passman(&dir)
        .args([
            "add", "bank", "--user", "alice", "--website", "bank.example", "--login", "a",
            "--password", "b",
        ])
        .assert()
        .success();

    passman(&dir)
        .args(["search", "ban", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bank.example"))
        .stdout(predicate::str::contains("mail.com").not());
}

#[test]
fn passwd_changes_account_password() {
    let dir = with_alice();
    passman(&dir)
        .env("PASSMAN_NEW_PASSWORD", "battery-staple")
        .args(["passwd", "--user", "alice"])
        .assert()
        .success();

    passman(&dir)
        .args(["list", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid password"));

    passman(&dir)
        .env("PASSMAN_PASSWORD", "battery-staple")
        .args(["list", "--user", "alice"])
        .assert()
        .success();
}

#[test]
fn remove_user_deletes_account() {
    let dir = with_alice();
    passman(&dir)
        .args(["remove-user", "--user", "alice", "--force"])
        .assert()
        .success();

    passman(&dir)
        .args(["list", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username"));
}

#[test]
fn corrupt_data_file_is_fatal_and_untouched() {
    let dir = TempDir::new().unwrap();
    let junk = "definitely not a passman data file, just some text";
    dir.child("data.dat").write_str(junk).unwrap();

    passman(&dir)
        .args(["register", "--user", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    dir.child("data.dat").assert(junk);
}

#[test]
fn data_file_flag_overrides_default() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .args(["register", "--user", "alice", "--data-file", "vault.dat"])
        .assert()
        .success();

    dir.child("vault.dat").assert(predicate::path::exists());
    dir.child("data.dat").assert(predicate::path::missing());
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    passman(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passman"));
}
