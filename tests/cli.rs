use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn xyplot() -> Command {
    Command::cargo_bin("xyplot").unwrap()
}

#[test]
fn missing_file_fails_before_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.dat");

    xyplot()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open file"))
        .stderr(predicate::str::contains("nope.dat"));
}

#[test]
fn single_token_line_fails_with_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1").unwrap();

    xyplot()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Line 1: expected 2 values, found 1"));
}

#[test]
fn non_numeric_line_fails_with_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 2\n3 x").unwrap();

    xyplot()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: invalid number \"x\""));
}

#[test]
fn help_lists_arguments() {
    xyplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("../data/xy.dat"));
}

#[test]
fn log_flag_writes_to_file_not_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("x.log");
    std::fs::write(&log_path, "stale contents\n").unwrap();

    let output = xyplot()
        .arg("--log")
        .arg(&log_path)
        .arg(dir.path().join("missing.dat"))
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("Error: Failed to open file"));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Starting xyplot"));
    assert!(log.contains("Failed to open file"));
    assert!(!log.contains("stale contents"));
}

#[test]
fn no_log_file_without_flag() {
    let dir = tempfile::tempdir().unwrap();

    xyplot()
        .current_dir(dir.path())
        .arg("missing.dat")
        .assert()
        .failure();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
