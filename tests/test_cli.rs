//! Tests for CLI argument parsing and precondition exits of the binary

mod common;

use assert_cmd::Command;
use clap::Parser;
use common::{entry_names, Workspace};
use dmxbatch::cli::Cli;
use predicates::prelude::*;
use std::path::PathBuf;

fn dmxbatch() -> Command {
    let mut cmd = Command::cargo_bin("dmxbatch").unwrap();
    cmd.env_remove("SFM_PATH");
    cmd
}

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["dmxbatch", "-b", "C:/SFM"]);

    assert_eq!(cli.base, Some(PathBuf::from("C:/SFM")));
    assert!(cli.input.is_none());
    assert!(cli.to.is_none());
    assert!(!cli.dry_run, "Default dry_run should be false");
    assert!(!cli.no_progress, "Default no_progress should be false");
    assert!(cli.report.is_none());
}

#[test]
fn test_cli_long_flags() {
    let cli = Cli::parse_from([
        "dmxbatch",
        "--base",
        "/opt/sfm",
        "--input",
        "/models",
        "--to",
        "tex",
        "--dry-run",
        "--report",
        "out.json",
        "--no-progress",
    ]);

    assert_eq!(cli.base, Some(PathBuf::from("/opt/sfm")));
    assert_eq!(cli.input, Some(PathBuf::from("/models")));
    assert_eq!(cli.to.as_deref(), Some("tex"));
    assert!(cli.dry_run);
    assert!(cli.no_progress);
    assert_eq!(cli.report, Some(PathBuf::from("out.json")));
}

#[test]
fn test_cli_target_is_not_validated_by_parser() {
    // Invalid formats are reported by the driver, same as a prompted answer
    let cli = Cli::parse_from(["dmxbatch", "-b", "sfm", "-i", "in", "-t", "foo"]);
    let request = cli.run_request();

    assert_eq!(request.target.as_deref(), Some("foo"));
    assert_eq!(request.base, Some(PathBuf::from("sfm")));
    assert_eq!(request.input, Some(PathBuf::from("in")));
}

#[test]
fn test_binary_missing_converter() {
    let ws = Workspace::without_converter();

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--input")
        .arg(&ws.input)
        .args(["--to", "binary", "--no-progress"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't find dmxconvert.exe at"))
        .stderr(predicate::str::contains("dmxconvert.exe"));

    assert!(entry_names(&ws.input).is_empty());
}

#[test]
fn test_binary_input_is_a_file() {
    let ws = Workspace::new();
    let file = ws.add_file("a.dmx", "a");

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--input")
        .arg(&file)
        .args(["--to", "binary", "--no-progress"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("This is not a folder"));

    assert_eq!(entry_names(&ws.input), vec!["a.dmx"]);
}

#[test]
fn test_binary_input_missing() {
    let ws = Workspace::new();

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--input")
        .arg(ws.input.join("missing"))
        .args(["--to", "tex", "--no-progress"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Can't find such folder"));
}

#[test]
fn test_binary_invalid_choice() {
    let ws = Workspace::new();
    ws.add_file("a.dmx", "a");

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--input")
        .arg(&ws.input)
        .args(["--to", "foo", "--no-progress"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected \"binary\" or \"tex\""));

    assert_eq!(entry_names(&ws.input), vec!["a.dmx"]);
}

#[test]
fn test_binary_base_from_environment() {
    let ws = Workspace::without_converter();

    dmxbatch()
        .env("SFM_PATH", &ws.base)
        .arg("--input")
        .arg(&ws.input)
        .args(["--to", "binary", "--no-progress"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Can't find dmxconvert.exe at"));
}

#[test]
fn test_binary_dry_run_echoes_commands() {
    let ws = Workspace::new();
    ws.add_file("a.dmx", "a");
    ws.add_file("b.txt", "b");

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--input")
        .arg(&ws.input)
        .args(["--to", "binary", "--dry-run", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-ie tex"))
        .stdout(predicate::str::contains("-of binary"))
        .stdout(predicate::str::contains("a.dmx"))
        .stdout(predicate::str::contains("b.txt").not());

    assert!(!ws.input.join("binary").exists());
}

#[test]
fn test_binary_reads_piped_answers() {
    let ws = Workspace::new();
    ws.add_file("a.dmx", "a");

    let answers = format!("{}\n{}\nbinary\n", ws.base.display(), ws.input.display());

    dmxbatch()
        .args(["--dry-run", "--no-progress"])
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter full path to the SFM folder"))
        .stdout(predicate::str::contains("-ie tex -o"))
        .stdout(predicate::str::contains("-of binary"));
}

#[test]
fn test_binary_piped_format_is_not_trimmed() {
    let ws = Workspace::new();
    ws.add_file("a.dmx", "a");

    let answers = format!("{}\n{}\n tex\n", ws.base.display(), ws.input.display());

    dmxbatch()
        .args(["--no-progress"])
        .write_stdin(answers)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("got \" tex\""));

    assert_eq!(entry_names(&ws.input), vec!["a.dmx"]);
}

#[test]
fn test_binary_empty_base_answer_is_current_folder() {
    let ws = Workspace::new();
    ws.add_file("a.dmx", "a");

    // Empty line means a path relative to the working directory
    let answers = format!("\n{}\ntex\n", ws.input.display());

    dmxbatch()
        .current_dir(&ws.base)
        .args(["--dry-run", "--no-progress"])
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("-ie binary -o"))
        .stdout(predicate::str::contains("-of tex"));
}

#[test]
fn test_binary_piped_input_ends_early() {
    let ws = Workspace::new();

    dmxbatch()
        .arg("--base")
        .arg(&ws.base)
        .arg("--no-progress")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected end of input"));
}
