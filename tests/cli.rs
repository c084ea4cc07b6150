/*!
 * Integration tests driving the lstable binary
 */

use std::fs::{self, File};
use std::io::Write;
use std::process::{Command, Output};

use tempfile::tempdir;

fn lstable(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lstable"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn data_rows(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.starts_with("| ") && !l.contains("Permissions"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_no_arguments_lists_working_directory() {
    let temp_dir = tempdir().unwrap();
    let mut file = File::create(temp_dir.path().join("README")).unwrap();
    writeln!(file, "read me").unwrap();

    let output = lstable(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let rows = data_rows(&output.stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].trim_end_matches('|').trim_end().ends_with("README"));
    // piped stdout is not a terminal
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}

#[test]
fn test_missing_path_sets_failure_status() {
    let temp_dir = tempdir().unwrap();
    File::create(temp_dir.path().join("a.txt")).unwrap();

    let output = lstable(temp_dir.path(), &["a.txt", "missing.txt"]);

    assert_eq!(output.status.code(), Some(84));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Content of: a.txt"));
    assert!(stdout.contains("Content of: missing.txt"));
    assert_eq!(data_rows(&output.stdout).len(), 1);
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "missing.txt: No such file or directory\n"
    );
}

#[test]
fn test_custom_error_code() {
    let temp_dir = tempdir().unwrap();
    let output = lstable(temp_dir.path(), &["--error-code", "3", "nope"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_forced_color() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();

    let output = lstable(temp_dir.path(), &["--color", "always"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\x1b[01;36mdocs\x1b[00m"));
}

#[test]
fn test_equal_codes_are_rejected() {
    let temp_dir = tempdir().unwrap();
    let output = lstable(temp_dir.path(), &["--success-code", "1", "--error-code", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_one_path_argument_gets_header() {
    let temp_dir = tempdir().unwrap();
    File::create(temp_dir.path().join("a.txt")).unwrap();

    let output = lstable(temp_dir.path(), &["a.txt"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Content of: a.txt\n"));
    assert_eq!(data_rows(&output.stdout).len(), 1);
}
