// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{File, OpenOptions},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a new file at `path` for writing.
    ///
    /// Fails with `AlreadyExists` rather than truncating if something appeared
    /// at `path` after the caller checked it was free.
    pub fn create_new<P: AsRef<Path>>(path: P) -> std::io::Result<File> {
        OpenOptions::new().write(true).create_new(true).open(path.as_ref())
    }
}
