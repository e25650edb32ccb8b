//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: classifying a path before deciding how to open it
//! - [`streams`]: acquiring the input and output streams of a run
//!
//! The use case layer depends on these traits only; the infra crate
//! provides the real implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod streams;
