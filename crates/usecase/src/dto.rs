// crates/usecase/src/dto.rs
use uniq_lines_domain::UniqueOptions;
use uniq_lines_shared_kernel::{ApplicationError, StreamTarget};

/// Everything a single run needs, already normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupRequest {
    pub input: StreamTarget,
    pub output: StreamTarget,
    pub options: UniqueOptions,
}

/// What a completed run did.
#[derive(Debug)]
pub struct DedupReport {
    pub lines_read: usize,
    pub distinct_lines: usize,
    pub lines_written: usize,
    /// Set when reading stopped on an I/O error; output covers the lines read before it.
    pub interrupted: Option<ApplicationError>,
}

impl DedupReport {
    pub const fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}
