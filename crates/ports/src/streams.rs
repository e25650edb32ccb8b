// crates/ports/src/streams.rs
use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use uniq_lines_shared_kernel::{InfraResult, StreamTarget};

/// How ambiguous paths are handled while resolving streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Fall back to the standard stream whenever a path cannot be used as given.
    #[default]
    Lenient,
    /// Report every such case as an error instead.
    Strict,
}

/// The readable side of a run.
pub struct InputStream {
    origin: StreamTarget,
    reader: Box<dyn BufRead>,
}

impl InputStream {
    pub fn new(origin: StreamTarget, reader: Box<dyn BufRead>) -> Self {
        Self { origin, reader }
    }

    /// Where the data actually comes from, after any fallback.
    pub fn origin(&self) -> &StreamTarget {
        &self.origin
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for InputStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt);
    }
}

/// The writable side of a run, tagged with who owns the underlying resource.
pub enum OutputStream {
    /// A file this run created. Closed once writing is finished.
    Owned { path: PathBuf, writer: BufWriter<File> },
    /// A shared stream such as stdout. Flushed, never closed.
    Borrowed(Box<dyn Write>),
}

impl OutputStream {
    pub fn owned(path: PathBuf, file: File) -> Self {
        Self::Owned { path, writer: BufWriter::new(file) }
    }

    pub fn borrowed(writer: Box<dyn Write>) -> Self {
        Self::Borrowed(writer)
    }

    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Owned { path, .. } => Some(path),
            Self::Borrowed(_) => None,
        }
    }

    /// Flush buffered data and release the stream if this run owns it.
    ///
    /// # Errors
    /// Returns the error from the final flush.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Owned { writer, .. } => {
                let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
                drop(file);
                Ok(())
            }
            Self::Borrowed(mut writer) => writer.flush(),
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Owned { writer, .. } => writer.write(buf),
            Self::Borrowed(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Owned { writer, .. } => writer.write_all(buf),
            Self::Borrowed(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Owned { writer, .. } => writer.flush(),
            Self::Borrowed(writer) => writer.flush(),
        }
    }
}

/// Port for turning command-line stream targets into open streams.
pub trait StreamResolver {
    /// # Errors
    /// Fails when the chosen source cannot be opened, or when the policy
    /// forbids the fallback the target would need.
    fn open_input(&self, target: &StreamTarget) -> InfraResult<InputStream>;

    /// # Errors
    /// Same conditions as [`open_input`](Self::open_input), for the destination.
    fn open_output(&self, target: &StreamTarget) -> InfraResult<OutputStream>;
}
