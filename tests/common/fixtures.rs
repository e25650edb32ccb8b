// tests/common/fixtures.rs
//! テストフィクスチャ

use assert_cmd::Command;

/// `a b a c b a`, one per line.
pub const SAMPLE_INPUT: &str = "a\nb\na\nc\nb\na\n";

/// Command for the built binary with logging forced quiet.
pub fn uniq_lines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_uniq_lines"));
    cmd.env_remove("UNIQ_LINES_LOG");
    cmd
}
