// crates/shared-kernel/src/value_objects/stream_target.rs
use std::{
    convert::Infallible,
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Spelling that always means the standard stream.
pub const STANDARD_STREAM: &str = "-";

/// Where a run reads from or writes to, as written on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StreamTarget {
    /// `-`: standard input or standard output depending on the role.
    #[default]
    Standard,
    Path(PathBuf),
}

impl StreamTarget {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Standard => None,
            Self::Path(path) => Some(path),
        }
    }

    pub const fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl From<&OsStr> for StreamTarget {
    fn from(value: &OsStr) -> Self {
        if value == STANDARD_STREAM {
            Self::Standard
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl From<&str> for StreamTarget {
    fn from(value: &str) -> Self {
        Self::from(OsStr::new(value))
    }
}

impl From<PathBuf> for StreamTarget {
    fn from(value: PathBuf) -> Self {
        Self::from(value.as_os_str())
    }
}

impl FromStr for StreamTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str(STANDARD_STREAM),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
