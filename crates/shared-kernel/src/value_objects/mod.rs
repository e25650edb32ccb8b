// crates/shared-kernel/src/value_objects/mod.rs
pub mod occurrence;
pub mod stream_target;

pub use occurrence::OccurrenceCount;
pub use stream_target::StreamTarget;
