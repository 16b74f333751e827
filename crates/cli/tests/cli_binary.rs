//! End-to-end tests for the todo binary over a local data file

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo-cli").unwrap();
    cmd.env_remove("TODO_API_URL")
        .env_remove("TODO_DATA_FILE")
        .arg("--data-file")
        .arg(dir.path().join("todos.json"));
    cmd
}

fn add_task(dir: &TempDir, title: &str) -> String {
    let output = todo(dir).args(["add", title]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("added ")
        .expect("add output")
        .to_string()
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk");

    todo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ongoing Tasks").and(predicate::str::contains("Buy milk")));
}

#[test]
fn test_blank_add_is_dropped() {
    let dir = TempDir::new().unwrap();

    todo(&dir)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to add"));

    todo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_toggle_moves_task_to_completed() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    todo(&dir)
        .args(["toggle", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now completed"));

    let output = todo(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let completed_at = stdout.find("Completed Tasks").unwrap();
    let task_at = stdout.find("Buy milk").unwrap();
    assert!(task_at > completed_at);
}

#[test]
fn test_edit_replaces_title() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    todo(&dir)
        .args(["edit", id.as_str(), "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    todo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy oat milk"));
}

#[test]
fn test_rm_deletes_task() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    todo(&dir).args(["rm", id.as_str()]).assert().success();

    let output = todo(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Buy milk"));
}

#[test]
fn test_unknown_ids_exit_nonzero() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk");
    let unknown = "00000000-0000-0000-0000-000000000000";

    todo(&dir)
        .args(["toggle", unknown])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    todo(&dir)
        .args(["rm", unknown])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_state_survives_invocations() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "First");
    add_task(&dir, "Second");
    let id = add_task(&dir, "Third");
    todo(&dir).args(["toggle", id.as_str()]).assert().success();

    let output = todo(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    for title in ["First", "Second", "Third"] {
        assert!(stdout.contains(title));
    }
    // Ongoing section lists oldest first
    assert!(stdout.find("First").unwrap() < stdout.find("Second").unwrap());
}
