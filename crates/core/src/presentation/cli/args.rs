// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

const AFTER_HELP: &str = "\
  [INPUT] can either be the path to an input file or '-' for stdin
  [OUTPUT] can either be the path to an output file or '-' for stdout";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "uniq_lines",
    version = crate::VERSION,
    about = "Print the distinct lines of the input in first-seen order",
    after_help = AFTER_HELP,
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Count occurrences
    #[arg(short = 'c', long = "count")]
    pub count: bool,

    /// Print only repeated lines
    #[arg(short = 'd', long = "repeated")]
    pub repeated: bool,

    /// Print only unique lines (default)
    #[arg(short = 'u', long = "unique")]
    pub unique: bool,

    /// Fail instead of falling back to stdin/stdout when a path cannot be used
    #[arg(long)]
    pub strict: bool,

    /// Input file, or '-' for stdin
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file, or '-' for stdout
    #[arg(value_name = "OUTPUT", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
