// crates/infra/src/resolver.rs
use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use uniq_lines_ports::{
    filesystem::{PathProbe, PathState},
    streams::{InputStream, OutputStream, ResolutionPolicy, StreamResolver},
};
use uniq_lines_shared_kernel::{InfraResult, InfrastructureError, StreamTarget};

use crate::{
    filesystem::FsProbe,
    persistence::{FileReader, FileWriter},
};

/// Resolution outcome: which concrete endpoint a target maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Standard,
    File(PathBuf),
}

/// Decide where input comes from.
///
/// Lenient: an existing non-directory path is read, everything else
/// (missing, directory, uninspectable) silently falls back to stdin.
///
/// # Errors
/// Only under [`ResolutionPolicy::Strict`], for paths that would need a fallback.
pub fn resolve_input(target: &StreamTarget, probe: &dyn PathProbe, policy: ResolutionPolicy) -> InfraResult<Endpoint> {
    let Some(path) = target.path() else {
        return Ok(Endpoint::Standard);
    };

    match (probe.probe(path), policy) {
        (PathState::File, _) => Ok(Endpoint::File(path.to_path_buf())),
        (state, ResolutionPolicy::Lenient) => {
            tracing::debug!(path = %path.display(), ?state, "input path unusable, reading standard input");
            Ok(Endpoint::Standard)
        }
        (PathState::Directory, ResolutionPolicy::Strict) => {
            Err(InfrastructureError::InputIsDirectory { path: path.to_path_buf() })
        }
        (PathState::Missing | PathState::Unknown, ResolutionPolicy::Strict) => {
            Err(InfrastructureError::InputNotFound { path: path.to_path_buf() })
        }
    }
}

/// Decide where output goes.
///
/// Lenient: only a path that does not exist yet is created; an existing file,
/// a directory, or an uninspectable path silently falls back to stdout, so an
/// existing file is never overwritten.
///
/// # Errors
/// Only under [`ResolutionPolicy::Strict`], for paths that would need a fallback.
pub fn resolve_output(target: &StreamTarget, probe: &dyn PathProbe, policy: ResolutionPolicy) -> InfraResult<Endpoint> {
    let Some(path) = target.path() else {
        return Ok(Endpoint::Standard);
    };

    match (probe.probe(path), policy) {
        (PathState::Missing, _) => Ok(Endpoint::File(path.to_path_buf())),
        (state, ResolutionPolicy::Lenient) => {
            tracing::debug!(path = %path.display(), ?state, "output path unusable, writing standard output");
            Ok(Endpoint::Standard)
        }
        (PathState::Directory, ResolutionPolicy::Strict) => {
            Err(InfrastructureError::OutputIsDirectory { path: path.to_path_buf() })
        }
        (PathState::File | PathState::Unknown, ResolutionPolicy::Strict) => {
            Err(InfrastructureError::OutputExists { path: path.to_path_buf() })
        }
    }
}

/// [`StreamResolver`] over the process's real standard streams and filesystem.
#[derive(Debug, Clone, Default)]
pub struct StdStreamResolver<P = FsProbe> {
    probe: P,
    policy: ResolutionPolicy,
}

impl StdStreamResolver<FsProbe> {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self::with_probe(FsProbe, policy)
    }
}

impl<P: PathProbe> StdStreamResolver<P> {
    pub fn with_probe(probe: P, policy: ResolutionPolicy) -> Self {
        Self { probe, policy }
    }
}

impl<P: PathProbe> StreamResolver for StdStreamResolver<P> {
    fn open_input(&self, target: &StreamTarget) -> InfraResult<InputStream> {
        match resolve_input(target, &self.probe, self.policy)? {
            Endpoint::Standard => Ok(InputStream::new(StreamTarget::Standard, Box::new(io::stdin().lock()))),
            Endpoint::File(path) => {
                let reader = FileReader::open_buffered(&path).map_err(|source| open_input_error(&path, source))?;
                Ok(InputStream::new(StreamTarget::Path(path), Box::new(reader)))
            }
        }
    }

    fn open_output(&self, target: &StreamTarget) -> InfraResult<OutputStream> {
        match resolve_output(target, &self.probe, self.policy)? {
            Endpoint::Standard => Ok(OutputStream::borrowed(Box::new(BufWriter::new(io::stdout().lock())))),
            Endpoint::File(path) => {
                let file = FileWriter::create_new(&path)
                    .map_err(|source| InfrastructureError::OutputOpen { path: path.clone(), source })?;
                Ok(OutputStream::owned(path, file))
            }
        }
    }
}

fn open_input_error(path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::InputOpen { path: path.to_path_buf(), source }
}
