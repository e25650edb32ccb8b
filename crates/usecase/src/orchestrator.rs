// crates/usecase/src/orchestrator.rs
use std::io::{self, BufRead};

use uniq_lines_domain::{OccurrenceTable, emit, model::strip_line_terminator};
use uniq_lines_ports::streams::StreamResolver;
use uniq_lines_shared_kernel::{ApplicationError, ErrorContext, InfrastructureError, Result};

use crate::dto::{DedupReport, DedupRequest};

/// Result of draining an input stream into an [`OccurrenceTable`].
#[derive(Debug)]
pub struct Accumulation {
    pub table: OccurrenceTable,
    pub lines_read: usize,
    /// The read error that ended accumulation early, if any.
    pub interrupted: Option<io::Error>,
}

/// Read `reader` to exhaustion, counting every line.
///
/// A read error ends accumulation like end-of-input would; whatever was
/// counted before it is kept and the error is handed back in
/// [`Accumulation::interrupted`]. A partially read line is discarded.
pub fn accumulate<R: BufRead + ?Sized>(reader: &mut R) -> Accumulation {
    let mut table = OccurrenceTable::new();
    let mut lines_read = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                table.record(strip_line_terminator(&buf));
                lines_read += 1;
            }
            Err(err) => {
                return Accumulation { table, lines_read, interrupted: Some(err) };
            }
        }
    }

    Accumulation { table, lines_read, interrupted: None }
}

/// Use case: deduplicate one input stream into one output stream.
pub struct DedupLines<'a> {
    resolver: &'a dyn StreamResolver,
}

impl<'a> DedupLines<'a> {
    pub fn new(resolver: &'a dyn StreamResolver) -> Self {
        Self { resolver }
    }

    /// Open both streams, accumulate the whole input, then emit.
    ///
    /// # Errors
    /// Stream acquisition failures and output write failures. A read error
    /// mid-stream is not an `Err`: it is reported in [`DedupReport::interrupted`]
    /// after the partial result has been written.
    pub fn run(&self, request: &DedupRequest) -> Result<DedupReport> {
        let mut input = self
            .resolver
            .open_input(&request.input)
            .with_context(|| format!("opening input '{}'", request.input))?;
        let mut output = self
            .resolver
            .open_output(&request.output)
            .with_context(|| format!("opening output '{}'", request.output))?;

        tracing::debug!(input = %input.origin(), owned_output = output.is_owned(), "streams resolved");

        let Accumulation { table, lines_read, interrupted } = accumulate(&mut input);
        if let Some(err) = &interrupted {
            tracing::warn!(lines_read, error = %err, "input read failed, emitting partial result");
        }

        let lines_written = emit(&table, &request.options, &mut output).map_err(write_error)?;
        output.finish().map_err(write_error)?;

        tracing::debug!(lines_read, distinct = table.len(), lines_written, "run complete");

        Ok(DedupReport {
            lines_read,
            distinct_lines: table.len(),
            lines_written,
            interrupted: interrupted.map(|source| ApplicationError::InputInterrupted { lines_read, source }),
        })
    }
}

fn write_error(source: io::Error) -> InfrastructureError {
    InfrastructureError::OutputWrite { source }
}
