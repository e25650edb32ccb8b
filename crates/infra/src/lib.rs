// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod resolver;

pub use filesystem::FsProbe;
pub use resolver::{Endpoint, StdStreamResolver, resolve_input, resolve_output};
