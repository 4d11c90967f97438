//! CLI tests for the `steptrack` binary.
//!
//! Spawns the binary in a temp directory and verifies exit codes and the
//! reports written to stdout for good, missing and short input files.

use std::fs;
use std::process::{Command, Output};

use steptrack::exit_codes;
use steptrack::test_support::StepsFile;

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_steptrack"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run steptrack")
}

#[test]
fn default_steps_file_runs_to_completion() {
    let file = StepsFile::with_values(&(1..=30).collect::<Vec<_>>()).expect("steps file");

    let output = run_in(file.dir(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Sum: 465\n"));
    assert!(stdout.contains("Avg: 15.5\n"));
    assert!(stdout.contains("Min: 1 (index 0)\n"));
    assert!(stdout.contains("Max: 30 (index 29)\n"));
    assert!(stdout.contains("After uniform shift (+100):"));
    assert!(stdout.contains("   430   351   130   129   128\n"));
    assert!(stdout.contains("Done. Program completed successfully."));
}

#[test]
fn missing_file_exits_with_input_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_in(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::INPUT_ERROR));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(!stdout.contains("--- Stats ---"));
    assert!(stderr.contains("could not open input file"));
    assert!(stderr.contains("Terminating program due to input error."));
}

#[test]
fn short_file_exits_with_input_error() {
    let file = StepsFile::with_contents("100\n200\nabc\n300\n").expect("steps file");

    let output = run_in(file.dir(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::INPUT_ERROR));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(!stdout.contains("--- Stats ---"));
    assert!(!stdout.contains("Top-"));
    assert!(stderr.contains("only read 2 values"));
    assert!(stderr.contains("Tip: Check for non-numeric characters"));
}

#[test]
fn config_file_and_flags_are_applied() {
    let file = StepsFile::with_values(&[5, 4, 3, 2, 1]).expect("steps file");
    fs::write(
        file.dir().join("steptrack.toml"),
        "min_days = 5\nshift_delta = 0\n",
    )
    .expect("write config");

    let output = run_in(file.dir(), &["--top-k", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Top-2 (sorted copy, original order preserved):"));
    // 5 + 250 at the front, 1 + 50 appended then + 250 at the back.
    assert!(stdout.contains("   301   255\n"));
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let file = StepsFile::with_values(&(1..=30).collect::<Vec<_>>()).expect("steps file");
    fs::write(file.dir().join("steptrack.toml"), "field_width = 0\n").expect("write config");

    let output = run_in(file.dir(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}
