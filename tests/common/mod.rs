// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod fixtures;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use temp::TempWorkspace;
