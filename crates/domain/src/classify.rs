// crates/domain/src/classify.rs
use std::io::{self, Write};

use crate::{
    model::{LineRecord, OccurrenceTable},
    options::{SelectionMode, UniqueOptions},
};

/// Entries of `table` selected by `mode`, in first-seen order.
///
/// `Unique` keeps every distinct line regardless of its count; `Repeated`
/// keeps only lines whose count is above one.
pub fn select(table: &OccurrenceTable, mode: SelectionMode) -> impl Iterator<Item = LineRecord<'_>> {
    table.iter().filter(move |record| match mode {
        SelectionMode::Unique => true,
        SelectionMode::Repeated => record.count.is_repeated(),
    })
}

/// Render one record as `<line>\n`, or `<count> <line>\n` when counting.
///
/// # Errors
/// Propagates the writer's I/O error.
pub fn write_record<W: Write + ?Sized>(out: &mut W, record: &LineRecord<'_>, count_occurrences: bool) -> io::Result<()> {
    if count_occurrences {
        write!(out, "{} ", record.count)?;
    }
    out.write_all(record.line)?;
    out.write_all(b"\n")
}

/// Write every selected record to `out` and return how many were written.
///
/// # Errors
/// Stops at the first failed write and returns its error.
pub fn emit<W: Write + ?Sized>(table: &OccurrenceTable, options: &UniqueOptions, out: &mut W) -> io::Result<usize> {
    let mut written = 0;
    for record in select(table, options.mode) {
        write_record(out, &record, options.count_occurrences)?;
        written += 1;
    }
    Ok(written)
}
