//! Integration tests for the `tudo` CLI.
//!
//! Each test writes a data file into a temp directory, runs `tudo` as a
//! subprocess, and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `tudo` binary.
fn tudo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tudo");
    path
}

const LISTS: &str = r#"[
  {
    "name": "chores",
    "group": "home",
    "id": "l1",
    "tasks": [
      { "id": "a", "tag": "obuy milk", "expan": ["oat"] },
      { "id": "b", "tag": "xwater plants", "expan": [] }
    ]
  }
]
"#;

/// Run `tudo` with config and data isolated under `root`.
fn run_tudo(root: &Path, args: &[&str]) -> Output {
    Command::new(tudo_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", root.join("config"))
        .env("XDG_DATA_HOME", root.join("data"))
        .env_remove("TUDO_LOG")
        .output()
        .expect("failed to run tudo")
}

fn data_file(root: &Path) -> PathBuf {
    root.join("data/tudo/lists.json")
}

fn write_data(root: &Path, content: &str) {
    let path = data_file(root);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// lists
// ---------------------------------------------------------------------------

#[test]
fn lists_prints_captions() {
    let tmp = TempDir::new().unwrap();
    write_data(tmp.path(), LISTS);

    let out = run_tudo(tmp.path(), &["lists"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "chores [home]\n 1 buy milk\n   - oat\nX water plants\n"
    );
}

#[test]
fn lists_json() {
    let tmp = TempDir::new().unwrap();
    write_data(tmp.path(), LISTS);

    let out = run_tudo(tmp.path(), &["lists", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json[0]["name"], "chores");
    assert_eq!(json[0]["tasks"][1]["struck"], true);
}

#[test]
fn lists_without_data_file() {
    let tmp = TempDir::new().unwrap();
    let out = run_tudo(tmp.path(), &["lists"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("No lists in"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_ok() {
    let tmp = TempDir::new().unwrap();
    write_data(tmp.path(), LISTS);

    let out = run_tudo(tmp.path(), &["check"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ok: 1 lists\n");
}

#[test]
fn check_reports_bad_marker() {
    let tmp = TempDir::new().unwrap();
    write_data(tmp.path(), &LISTS.replace("xwater", "-water"));

    let out = run_tudo(tmp.path(), &["check"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid tag marker"), "{stderr}");
    assert!(stderr.contains("chores"), "{stderr}");
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_appends_list() {
    let tmp = TempDir::new().unwrap();
    write_data(tmp.path(), LISTS);

    let out = run_tudo(tmp.path(), &["new", "errands", "--group", "town"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "created errands [town]\n");

    let out = run_tudo(tmp.path(), &["lists"]);
    assert!(stdout(&out).ends_with("\n\nerrands [town]\n"));

    let saved = fs::read_to_string(data_file(tmp.path())).unwrap();
    assert!(saved.ends_with("]\n"));
    assert!(saved.contains("\"tag\": \"obuy milk\""));
}

#[test]
fn new_reports_nothing_when_save_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run_tudo(
        tmp.path(),
        &["new", "groceries", "--data", "/proc/tudo-no-write/lists.json"],
    );
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(String::from_utf8_lossy(&out.stderr).contains("could not write"));

    let out = run_tudo(
        tmp.path(),
        &["new", "groceries", "--json", "--data", "/proc/tudo-no-write/lists.json"],
    );
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn new_defaults_group() {
    let tmp = TempDir::new().unwrap();
    let out = run_tudo(tmp.path(), &["new", "inbox"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "created inbox [none]\n");
}

#[test]
fn data_flag_overrides_location() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("elsewhere.json");
    fs::write(&custom, LISTS).unwrap();

    let out = run_tudo(tmp.path(), &["--data", custom.to_str().unwrap(), "check"]);
    assert!(out.status.success());
    assert!(!data_file(tmp.path()).exists());
}

#[test]
fn config_sets_storage_path() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("from-config.json");
    fs::write(&custom, LISTS).unwrap();
    let config = tmp.path().join("config/tudo/tudo.toml");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(
        &config,
        format!("[storage]\npath = {:?}\n", custom.to_str().unwrap()),
    )
    .unwrap();

    let out = run_tudo(tmp.path(), &["lists"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("chores [home]"));
}

#[test]
fn malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "[storage\n").unwrap();

    let out = run_tudo(tmp.path(), &["--config", config.to_str().unwrap(), "check"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("could not parse"));
}
