// crates/core/src/config.rs
use uniq_lines_domain::UniqueOptions;
use uniq_lines_ports::streams::ResolutionPolicy;
use uniq_lines_shared_kernel::StreamTarget;
use uniq_lines_usecase::DedupRequest;

/// Fully resolved run configuration. Built once from CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input: StreamTarget,
    pub output: StreamTarget,
    pub options: UniqueOptions,
    pub policy: ResolutionPolicy,
}

impl Config {
    pub fn request(&self) -> DedupRequest {
        DedupRequest {
            input: self.input.clone(),
            output: self.output.clone(),
            options: self.options,
        }
    }
}
