// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

pub use bootstrap::{RunStatus, execute};
pub use config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
