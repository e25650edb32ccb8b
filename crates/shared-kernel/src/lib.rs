// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, Result, UniqLinesError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{OccurrenceCount, StreamTarget};
