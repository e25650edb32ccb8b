//! # Domain
//!
//! Pure deduplication logic with no I/O endpoint knowledge:
//!
//! - [`options`]: the canonical options record every run consumes
//! - [`model`]: the ordered occurrence table built from input lines
//! - [`classify`]: selection and rendering of table entries

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod model;
pub mod options;

pub use classify::{emit, select, write_record};
pub use model::{LineRecord, OccurrenceTable};
pub use options::{SelectionMode, UniqueOptions};
