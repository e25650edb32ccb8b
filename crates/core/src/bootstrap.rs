// crates/core/src/bootstrap.rs
use std::process::ExitCode;

use uniq_lines_infra::StdStreamResolver;
use uniq_lines_ports::streams::ResolutionPolicy;
use uniq_lines_usecase::{DedupLines, DedupReport};

use crate::{config::Config, error::Result};

/// How a run ended, from the process's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Carries the message to print on stderr.
    Failure(String),
}

impl RunStatus {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failure(_) => ExitCode::FAILURE,
        }
    }
}

/// Run one dedup pass over the process's real streams and report the outcome
/// on stderr. Returns the exit code the process should end with.
pub fn execute(config: &Config) -> ExitCode {
    let status = run_with_config(config);
    if let RunStatus::Failure(message) = &status {
        eprintln!("Error: {message}");
    }
    status.exit_code()
}

pub fn run_with_config(config: &Config) -> RunStatus {
    let resolver = StdStreamResolver::new(config.policy);
    let result = DedupLines::new(&resolver).run(&config.request());
    settle(result, config.policy)
}

/// Map a run result onto an exit status.
///
/// Under the lenient policy a stream that could not be opened is only logged
/// and the run still succeeds, as does a read error after which the partial
/// result was written. The strict policy turns both into failures. Write
/// errors fail under either policy.
pub fn settle(result: Result<DedupReport>, policy: ResolutionPolicy) -> RunStatus {
    let strict = matches!(policy, ResolutionPolicy::Strict);

    match result {
        Ok(DedupReport { interrupted: Some(err), .. }) if strict => RunStatus::Failure(err.to_string()),
        Ok(_) => RunStatus::Success,
        Err(err) if err.is_stream_open() && !strict => {
            tracing::warn!(error = %err, "stream unavailable, nothing processed");
            RunStatus::Success
        }
        Err(err) => RunStatus::Failure(err.to_string()),
    }
}
