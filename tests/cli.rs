#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("minimal_notes").unwrap();
    c.env("MINIMAL_NOTES_DIR", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("MINIMAL_NOTES_KEY")
        .env_remove("MINIMAL_NOTES_LOG");
    c
}

fn slot(dir: &Path) -> std::path::PathBuf {
    dir.join("minimal-notes.json")
}

fn stored(dir: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(slot(dir)).expect("notes file");
    match serde_json::from_str(&raw).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

fn only_id(dir: &Path) -> String {
    let notes = stored(dir);
    assert_eq!(notes.len(), 1);
    notes[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn fresh_directory_lists_placeholder() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved notes"));
    cmd(&temp)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn add_then_list_and_view() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["add", "Hello", "World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved note"))
        .stdout(predicate::str::contains("(Hello)"));

    let id = only_id(temp.path());
    let note = &stored(temp.path())[0];
    assert_eq!(note["title"], "Hello");
    assert_eq!(note["text"], "World");
    assert_eq!(note["createdAt"], note["updatedAt"]);
    assert!(id.chars().all(|c| c.is_ascii_digit()));

    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"))
        .stdout(predicate::str::contains("World"))
        .stdout(predicate::str::contains(format!("[load {id}]  [delete {id}]")));

    cmd(&temp)
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# Hello ({id})")));
}

#[test]
fn add_blank_title_is_untitled() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "   ", "body"]).assert().success();
    assert_eq!(stored(temp.path())[0]["title"], "Untitled");
}

#[test]
fn update_keeps_id_and_created() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "Hello", "World"]).assert().success();
    let id = only_id(temp.path());
    let created = stored(temp.path())[0]["createdAt"].clone();

    std::thread::sleep(std::time::Duration::from_millis(5));
    cmd(&temp)
        .args(["update", &id, "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated note {id}")));

    let notes = stored(temp.path());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], id.as_str());
    assert_eq!(notes[0]["title"], "Hi");
    assert_eq!(notes[0]["text"], "World");
    assert_eq!(notes[0]["createdAt"], created);
    assert!(notes[0]["updatedAt"].as_i64().unwrap() > created.as_i64().unwrap());

    // an update may blank the title
    cmd(&temp).args(["update", &id, "", "new body"]).assert().success();
    let notes = stored(temp.path());
    assert_eq!(notes[0]["title"], "");
    assert_eq!(notes[0]["text"], "new body");
}

#[test]
fn update_and_view_unknown_id_fail() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["update", "nope", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note nope not found"));
    cmd(&temp)
        .args(["view", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note nope not found"));
    assert!(!slot(temp.path()).exists());
}

#[test]
fn delete_asks_first() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "keep?"]).assert().success();
    let id = only_id(temp.path());
    let before = fs::read_to_string(slot(temp.path())).unwrap();

    cmd(&temp)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete this note? [y/N]"))
        .stdout(predicate::str::contains("Nothing deleted."));
    assert_eq!(fs::read_to_string(slot(temp.path())).unwrap(), before);

    cmd(&temp)
        .args(["delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted {id}")));
    assert!(stored(temp.path()).is_empty());
}

#[test]
fn delete_unknown_id_with_yes() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "stays"]).assert().success();
    cmd(&temp)
        .args(["delete", "missing", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note missing not found"));
    assert_eq!(stored(temp.path()).len(), 1);
}

#[test]
fn delete_all_removes_file() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "one"]).assert().success();
    cmd(&temp).args(["add", "two"]).assert().success();
    assert_eq!(stored(temp.path()).len(), 2);

    cmd(&temp)
        .args(["delete-all"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
    assert!(slot(temp.path()).exists());

    cmd(&temp)
        .args(["delete-all", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted all notes."));
    assert!(!slot(temp.path()).exists());
    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved notes"));
}

#[test]
fn list_is_newest_first() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "older"]).assert().success();
    cmd(&temp).args(["add", "newer"]).assert().success();
    let out = cmd(&temp)
        .args(["list", "--relative"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);
    assert!(out.find("newer").unwrap() < out.find("older").unwrap());
    assert!(out.contains("just now"));
}

#[test]
fn list_truncates_long_bodies() {
    let temp = TempDir::new().unwrap();
    let long = "a".repeat(250);
    let short = "b".repeat(150);
    cmd(&temp).args(["add", "long", &long]).assert().success();
    cmd(&temp).args(["add", "short", &short]).assert().success();
    let out = cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);
    assert!(out.contains(&format!("{}…", "a".repeat(200))));
    assert!(!out.contains(&"a".repeat(201)));
    assert!(out.contains(&format!("{short}\n")));
}

#[test]
fn corrupt_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(slot(temp.path()), "{ definitely not json").unwrap();
    cmd(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved notes"));

    cmd(&temp).args(["add", "fresh"]).assert().success();
    assert_eq!(stored(temp.path()).len(), 1);
}

#[test]
fn storage_key_override() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .env("MINIMAL_NOTES_KEY", "work")
        .args(["add", "scoped"])
        .assert()
        .success();
    assert!(temp.path().join("work.json").exists());
    assert!(!slot(temp.path()).exists());
}

#[test]
fn session_saves_with_accelerators() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["session"])
        .write_stdin("title Hello\ntext World\n^S\ntext World again\nctrl+s\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(new)"))
        .stdout(predicate::str::contains("(updated)"));

    let notes = stored(temp.path());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Hello");
    assert_eq!(notes[0]["text"], "World again");
}

#[test]
fn session_new_over_dirty_editor_can_be_declined() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["session"])
        .write_stdin("title draft\nnew\nn\nshow\nnew\ny\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Start a new blank note? [y/N]"))
        .stdout(predicate::str::contains("Kept the current note."))
        .stdout(predicate::str::contains("Title: draft"))
        .stdout(predicate::str::contains("[New]"))
        .stdout(predicate::str::contains("(new note)"));
    assert!(!slot(temp.path()).exists());
}

#[test]
fn session_load_and_delete_current() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["add", "Loaded title", "loaded body"]).assert().success();
    let id = only_id(temp.path());
    cmd(&temp)
        .args(["session"])
        .write_stdin(format!("load {id}\ndelete {id}\ny\nshow\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[Loaded]"))
        .stdout(predicate::str::contains(format!("(editing {id})")))
        .stdout(predicate::str::contains("loaded body"))
        .stdout(predicate::str::contains("[Deleted]"))
        .stdout(predicate::str::contains("(new note)"));
    assert!(stored(temp.path()).is_empty());
}

#[test]
fn path_and_help() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            temp.path().to_string_lossy().as_ref(),
        ));

    cmd(&temp)
        .args(["help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimal Notes"))
        .stdout(predicate::str::contains("mn session"));

    cmd(&temp)
        .args(["help", "session"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^S"));
}

#[test]
fn short_binary_forwards() {
    let temp = TempDir::new().unwrap();
    let mut c = assert_cmd::Command::cargo_bin("mn").unwrap();
    c.env("MINIMAL_NOTES_DIR", temp.path())
        .env("NO_COLOR", "1")
        .args(["add", "via mn"])
        .assert()
        .success();
    assert_eq!(stored(temp.path())[0]["title"], "via mn");
}

#[test]
fn unknown_flag_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["list", "--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown flag for list: --bogus"));
}
