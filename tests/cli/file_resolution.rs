// tests/cli/file_resolution.rs
use predicates::prelude::*;

use crate::common::{SAMPLE_INPUT, TempWorkspace, uniq_lines};

#[test]
fn reads_file_and_writes_new_file() {
    let ws = TempWorkspace::new("file_to_file");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let output = ws.join("out.txt");

    uniq_lines().arg("-c").arg(&input).arg(&output).assert().success().stdout("");

    assert_eq!(ws.read_file("out.txt"), "3 a\n2 b\n1 c\n");
}

#[test]
fn empty_input_file_still_creates_output() {
    let ws = TempWorkspace::new("empty");
    let input = ws.write_file("empty.txt", "");
    let output = ws.join("out.txt");

    uniq_lines().arg(&input).arg(&output).assert().success().stdout("");

    assert!(output.exists());
    assert_eq!(ws.read_file("out.txt"), "");
}

#[test]
fn missing_input_falls_back_to_stdin() {
    let ws = TempWorkspace::new("missing_input");

    uniq_lines()
        .arg(ws.join("nope.txt"))
        .write_stdin("from stdin\nfrom stdin\n")
        .assert()
        .success()
        .stdout("from stdin\n");
}

#[test]
fn directory_input_falls_back_to_stdin() {
    let ws = TempWorkspace::new("dir_input");

    uniq_lines().arg(ws.path()).write_stdin("q\n").assert().success().stdout("q\n");
}

#[test]
fn existing_output_is_not_overwritten() {
    let ws = TempWorkspace::new("existing_output");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let output = ws.write_file("out.txt", "precious\n");

    uniq_lines().arg("-d").arg(&input).arg(&output).assert().success().stdout("a\nb\n");

    assert_eq!(ws.read_file("out.txt"), "precious\n");
}

#[test]
fn directory_output_falls_back_to_stdout() {
    let ws = TempWorkspace::new("dir_output");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);

    uniq_lines().arg(&input).arg(ws.path()).assert().success().stdout("a\nb\nc\n");
}

#[test]
fn unopenable_output_is_silent_when_lenient() {
    let ws = TempWorkspace::new("lenient_open");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let output = ws.join("no_such_dir/out.txt");

    uniq_lines().arg(&input).arg(&output).assert().success().stdout("").stderr("");

    assert!(!output.exists());
}

#[test]
fn unopenable_output_fails_when_strict() {
    let ws = TempWorkspace::new("strict_open");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let output = ws.join("no_such_dir/out.txt");

    uniq_lines()
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to create output"));
}

#[test]
fn strict_rejects_missing_input() {
    let ws = TempWorkspace::new("strict_missing");

    uniq_lines()
        .arg("--strict")
        .arg(ws.join("nope.txt"))
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn strict_rejects_existing_output() {
    let ws = TempWorkspace::new("strict_existing");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let output = ws.write_file("out.txt", "precious\n");

    uniq_lines()
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ws.read_file("out.txt"), "precious\n");
}

#[test]
fn unique_output_fed_back_is_unchanged() {
    let ws = TempWorkspace::new("idempotent");
    let input = ws.write_file("in.txt", SAMPLE_INPUT);
    let first = ws.join("first.txt");
    let second = ws.join("second.txt");

    uniq_lines().arg(&input).arg(&first).assert().success();
    uniq_lines().arg(&first).arg(&second).assert().success();

    assert_eq!(ws.read_file("first.txt"), ws.read_file("second.txt"));
}
