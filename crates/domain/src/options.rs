// crates/domain/src/options.rs
use uniq_lines_shared_kernel::{DomainError, DomainResult};

/// Which distinct lines make it to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Every distinct line once, whatever its count (`-u`, the default).
    #[default]
    Unique,
    /// Only distinct lines seen more than once (`-d`).
    Repeated,
}

/// Canonical options record. Raw flag spellings never reach past this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniqueOptions {
    pub count_occurrences: bool,
    pub mode: SelectionMode,
}

impl UniqueOptions {
    pub const fn new(count_occurrences: bool, mode: SelectionMode) -> Self {
        Self { count_occurrences, mode }
    }

    /// Normalise the three boolean switches into one record.
    ///
    /// Neither mode requested falls back to [`SelectionMode::Unique`].
    ///
    /// # Errors
    /// [`DomainError::ConflictingModes`] when both modes are requested.
    pub fn from_flags(count_occurrences: bool, repeated: bool, unique: bool) -> DomainResult<Self> {
        let mode = match (repeated, unique) {
            (true, true) => return Err(DomainError::ConflictingModes),
            (true, false) => SelectionMode::Repeated,
            (false, _) => SelectionMode::Unique,
        };
        Ok(Self::new(count_occurrences, mode))
    }

    pub const fn print_unique_lines(&self) -> bool {
        matches!(self.mode, SelectionMode::Unique)
    }

    pub const fn print_repeated_lines(&self) -> bool {
        matches!(self.mode, SelectionMode::Repeated)
    }
}
