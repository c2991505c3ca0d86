//! Tests for parallel CLI processing of multiple files.

use std::fs;

use tempfile::tempdir;

mod prelude;
use prelude::*;

fn run_cli_with_args(args: &[&str]) -> std::process::Output {
    Command::cargo_bin("wordflow")
        .expect("failed to create command")
        .args(args)
        .output()
        .expect("failed to run command")
}

#[rstest]
fn test_cli_parallel_empty_stdin() {
    let output = run_cli_with_args(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
}

#[rstest]
fn test_cli_parallel_multiple_files() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("file{i}.txt"));
        let text = format!("file {i} has some words in it\n");
        fs::write(&path, &text).expect("failed to write file");
        expected.push_str(&wordflow::wrap_string(&text, 10));
        files.push(path);
    }

    let mut cmd = Command::cargo_bin("wordflow").expect("failed to create command");
    cmd.args(["-w", "10"]);
    for path in &files {
        cmd.arg(path);
    }
    let output = cmd.output().expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(expected.starts_with("file 0\nhas some\n"));
}

#[rstest]
fn test_cli_parallel_missing_file_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.txt");
    fs::write(&good, "still printed in full\n").expect("failed to write file");
    let missing = dir.path().join("missing.txt");

    let output = Command::cargo_bin("wordflow")
        .expect("failed to create command")
        .args(["-w", "10"])
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "still\nprinted\nin full\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[rstest]
fn test_cli_parallel_missing_file_in_place() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.txt");
    fs::write(&good, "hello world\n").expect("failed to write file");
    let missing = dir.path().join("missing.txt");

    let output = Command::cargo_bin("wordflow")
        .expect("failed to create command")
        .args(["--in-place", "-w", "10"])
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
    assert_eq!(
        fs::read_to_string(&good).expect("failed to read file"),
        "hello\nworld\n"
    );
}
