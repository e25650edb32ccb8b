// crates/ports/src/filesystem.rs
use std::path::Path;

/// What a path points at right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Missing,
    File,
    Directory,
    /// Metadata could not be read for a reason other than non-existence.
    Unknown,
}

/// Port for inspecting paths without opening them.
pub trait PathProbe {
    fn probe(&self, path: &Path) -> PathState;
}
