// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum UniqLinesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<UniqLinesError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl UniqLinesError {
    /// Innermost error, skipping any number of `Context` layers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the failure happened while acquiring the input or output stream.
    pub fn is_stream_open(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(err) if err.is_open_failure())
    }
}

pub type Result<T> = std::result::Result<T, UniqLinesError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Specify either -u OR -d")]
    ConflictingModes,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Input ended early after {lines_read} lines: {source}")]
    InputInterrupted {
        lines_read: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open input '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output '{path}': {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{path}' does not exist or cannot be inspected")]
    InputNotFound { path: PathBuf },

    #[error("Input '{path}' is a directory")]
    InputIsDirectory { path: PathBuf },

    #[error("Output '{path}' already exists")]
    OutputExists { path: PathBuf },

    #[error("Output '{path}' is a directory")]
    OutputIsDirectory { path: PathBuf },

    #[error("Failed to write output: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    /// Stream acquisition failures, as opposed to failures once data is flowing.
    pub const fn is_open_failure(&self) -> bool {
        !matches!(self, Self::OutputWrite { .. })
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("No input or output specified")]
    MissingEndpoints,

    #[error(transparent)]
    InvalidOptions(#[from] DomainError),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<UniqLinesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| UniqLinesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| UniqLinesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
