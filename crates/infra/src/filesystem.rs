// crates/infra/src/filesystem.rs
use std::{io::ErrorKind, path::Path};

use uniq_lines_ports::filesystem::{PathProbe, PathState};

/// [`PathProbe`] backed by `std::fs::metadata` (symlinks are followed).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn probe(&self, path: &Path) -> PathState {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathState::Directory,
            Ok(_) => PathState::File,
            Err(err) if err.kind() == ErrorKind::NotFound => PathState::Missing,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "could not inspect path");
                PathState::Unknown
            }
        }
    }
}
