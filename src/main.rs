// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use uniq_lines_core::{bootstrap, logging, presentation::cli};

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("Warning: {err:#}");
    }

    let config = match cli::load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    bootstrap::execute(&config)
}
