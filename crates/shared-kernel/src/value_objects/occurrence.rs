// crates/shared-kernel/src/value_objects/occurrence.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Number of times a distinct line appeared in the input. Always at least one
/// once a line has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OccurrenceCount(usize);

impl OccurrenceCount {
    /// Count for a line seen exactly once.
    pub const ONCE: Self = Self(1);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// 二回以上出現した行のみ repeated 扱い
    #[inline]
    pub const fn is_repeated(self) -> bool {
        self.0 > 1
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for OccurrenceCount {
    fn default() -> Self {
        Self::ONCE
    }
}

impl Add for OccurrenceCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for OccurrenceCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl From<usize> for OccurrenceCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<OccurrenceCount> for usize {
    fn from(value: OccurrenceCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for OccurrenceCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<OccurrenceCount> for usize {
    fn eq(&self, other: &OccurrenceCount) -> bool {
        *self == other.0
    }
}

impl Sum<OccurrenceCount> for usize {
    fn sum<I: Iterator<Item = OccurrenceCount>>(iter: I) -> Self {
        iter.map(OccurrenceCount::value).sum()
    }
}

impl<'a> Sum<&'a OccurrenceCount> for usize {
    fn sum<I: Iterator<Item = &'a OccurrenceCount>>(iter: I) -> Self {
        iter.map(|c| c.value()).sum()
    }
}

impl fmt::Display for OccurrenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
