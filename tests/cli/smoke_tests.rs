// tests/cli/smoke_tests.rs
use predicates::prelude::*;

use crate::common::{SAMPLE_INPUT, uniq_lines};

#[test]
fn shows_help() {
    uniq_lines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("uniq_lines"))
        .stdout(predicate::str::contains("'-' for stdin"))
        .stdout(predicate::str::contains("--repeated"));
}

#[test]
fn shows_version() {
    uniq_lines()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unique_mode_is_the_default() {
    uniq_lines().arg("-").write_stdin(SAMPLE_INPUT).assert().success().stdout("a\nb\nc\n");
}

#[test]
fn unique_mode_with_counts() {
    uniq_lines()
        .args(["-c", "-u", "-"])
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .success()
        .stdout("3 a\n2 b\n1 c\n");
}

#[test]
fn repeated_mode() {
    uniq_lines().args(["-d", "-"]).write_stdin(SAMPLE_INPUT).assert().success().stdout("a\nb\n");
}

#[test]
fn repeated_mode_with_counts_long_flags() {
    uniq_lines()
        .args(["--count", "--repeated", "-", "-"])
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .success()
        .stdout("3 a\n2 b\n");
}

#[test]
fn empty_input_prints_nothing() {
    for flags in [&["-"][..], &["-c", "-"], &["-d", "-"], &["-c", "-d", "-"]] {
        uniq_lines().args(flags).write_stdin("").assert().success().stdout("");
    }
}

#[test]
fn single_line_is_not_repeated() {
    uniq_lines().args(["-d", "-"]).write_stdin("x\n").assert().success().stdout("");
}

#[test]
fn unique_mode_keeps_lines_seen_many_times() {
    uniq_lines().args(["-u", "-"]).write_stdin("z\nz\nz\n").assert().success().stdout("z\n");
}

#[test]
fn crlf_and_missing_final_newline() {
    uniq_lines()
        .args(["-c", "-"])
        .write_stdin("a\r\nb\na\r\nb")
        .assert()
        .success()
        .stdout("2 a\n2 b\n");
}

#[test]
fn trailing_cr_without_newline_is_stripped() {
    uniq_lines().args(["-c", "-"]).write_stdin("a\r\na\r").assert().success().stdout("2 a\n");
}

#[test]
fn flag_after_positional_is_still_a_flag() {
    uniq_lines().args(["-", "-c"]).write_stdin("q\nq\n").assert().success().stdout("2 q\n");
}

#[test]
fn raw_bytes_pass_through() {
    uniq_lines()
        .args(["-c", "-"])
        .write_stdin(vec![0xff, b'\n', 0xff, b'\n', b'\n'])
        .assert()
        .success()
        .stdout(&b"2 \xff\n1 \n"[..]);
}

#[test]
fn both_modes_is_a_usage_error() {
    uniq_lines()
        .args(["-u", "-d", "-"])
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Specify either -u OR -d"));
}

#[test]
fn no_positional_arguments_is_a_usage_error() {
    uniq_lines()
        .arg("-c")
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No input or output specified"));
}

#[test]
fn logs_never_reach_stdout() {
    uniq_lines()
        .env("UNIQ_LINES_LOG", "debug")
        .arg("-")
        .write_stdin(SAMPLE_INPUT)
        .assert()
        .success()
        .stdout("a\nb\nc\n")
        .stderr(predicate::str::contains("run complete"));
}
