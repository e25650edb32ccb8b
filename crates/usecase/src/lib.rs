//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: one dedup run, from stream resolution to release
//! - [`dto`]: request and report types at the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{DedupReport, DedupRequest};
pub use orchestrator::{Accumulation, DedupLines, accumulate};
