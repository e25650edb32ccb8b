//! Re-export error types from the shared kernel crate.

pub use uniq_lines_shared_kernel::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, Result, UniqLinesError,
};
