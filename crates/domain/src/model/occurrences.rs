// crates/domain/src/model/occurrences.rs
use indexmap::IndexMap;
use uniq_lines_shared_kernel::OccurrenceCount;

use super::LineRecord;

/// Distinct lines with their occurrence counts, kept in first-seen order.
///
/// The map's insertion order is the first-occurrence order, so there is no
/// separate order list that could drift out of sync with the counts.
/// Entries are only ever inserted or incremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceTable {
    entries: IndexMap<Vec<u8>, OccurrenceCount>,
}

impl OccurrenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `line`. The bytes are compared verbatim.
    pub fn record(&mut self, line: &[u8]) {
        if let Some(count) = self.entries.get_mut(line) {
            count.increment();
        } else {
            self.entries.insert(line.to_vec(), OccurrenceCount::ONCE);
        }
    }

    /// Same as [`record`](Self::record) but reuses the caller's allocation for new keys.
    pub fn record_owned(&mut self, line: Vec<u8>) {
        self.entries
            .entry(line)
            .and_modify(OccurrenceCount::increment)
            .or_insert(OccurrenceCount::ONCE);
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of lines recorded.
    pub fn total_occurrences(&self) -> usize {
        self.entries.values().sum()
    }

    pub fn count_of(&self, line: &[u8]) -> Option<OccurrenceCount> {
        self.entries.get(line).copied()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = LineRecord<'_>> + '_ {
        self.entries
            .iter()
            .map(|(line, &count)| LineRecord::new(line.as_slice(), count))
    }
}

impl<L: AsRef<[u8]>> Extend<L> for OccurrenceTable {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        for line in iter {
            self.record(line.as_ref());
        }
    }
}

impl<L: AsRef<[u8]>> FromIterator<L> for OccurrenceTable {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Strip one trailing `\n` from a raw line buffer, then one trailing `\r`.
///
/// The `\r` goes even when no `\n` followed it, so an unterminated last line
/// ending in `\r` keys the same as its CRLF-terminated twin.
pub fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
