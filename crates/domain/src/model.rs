pub mod occurrences;
pub mod record;

pub use occurrences::{OccurrenceTable, strip_line_terminator};
pub use record::LineRecord;
