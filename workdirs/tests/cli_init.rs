//! CLI tests for `workdirs init` and `workdirs show`.
//!
//! Spawns the binary against throwaway projects and checks stdout, exit codes,
//! and what ends up on disk.

use std::process::{Command, Output};

use workdirs::exit_codes;
use workdirs::test_support::TestProject;

fn run_workdirs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_workdirs"))
        .args(args)
        .output()
        .expect("spawn workdirs")
}

#[test]
fn init_creates_directories_and_reports_status() {
    let project = TestProject::new().expect("project");
    let anchor = project.location_path();
    let anchor = anchor.to_str().expect("utf-8 path");

    let first = run_workdirs(&["init", "--anchor", anchor]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&first.stdout);
    let input = project.root().join("input");
    assert!(stdout.contains(&format!("init: input={} status=created", input.display())));
    assert!(input.is_dir());
    assert!(project.root().join("output").is_dir());

    let second = run_workdirs(&["init", "--anchor", anchor]);
    assert_eq!(second.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert_eq!(stdout.matches("status=existing").count(), 2);
}

#[test]
fn init_fails_when_base_dir_missing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let base = temp.path().join("gone");
    let anchor = base.join("src").join("config.rs");

    let output = run_workdirs(&["init", "--anchor", anchor.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("create directory"));
    assert!(!base.exists());
}

#[test]
fn show_clamps_anchor_at_filesystem_root() {
    let output = run_workdirs(&["show", "--anchor", "/config.rs"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "base_dir=/\ninput_dir=/input\noutput_dir=/output\n");
}

#[test]
fn show_json_does_not_touch_filesystem() {
    let project = TestProject::new().expect("project");
    let anchor = project.location_path();

    let output = run_workdirs(&[
        "show",
        "--format",
        "json",
        "--anchor",
        anchor.to_str().expect("utf-8 path"),
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    let input = project.root().join("input");
    assert_eq!(value["input_dir"].as_str(), input.to_str());
    assert!(!input.exists());
    assert!(!project.root().join("output").exists());
}
