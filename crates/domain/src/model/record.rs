// crates/domain/src/model/record.rs
use std::borrow::Cow;

use uniq_lines_shared_kernel::OccurrenceCount;

/// One distinct line together with how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub line: &'a [u8],
    pub count: OccurrenceCount,
}

impl<'a> LineRecord<'a> {
    pub const fn new(line: &'a [u8], count: OccurrenceCount) -> Self {
        Self { line, count }
    }

    /// Lossy text view, for diagnostics and tests only. Output always uses raw bytes.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.line)
    }
}
