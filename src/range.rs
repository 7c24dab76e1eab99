//! Matched fragments of a name.

use std::fmt::{Display, Error, Formatter};

/// A half-open `[start, end)` interval of character offsets inside a name.
///
/// `error_count` is the number of approximate (typo) substitutions inside the
/// fragment; it is always zero for exact matching.
#[derive(Eq, PartialEq, Hash, Debug, Copy, Clone, Default)]
pub struct Range {
    start: usize,
    end: usize,
    error_count: usize,
}

impl Range {
    /// Creates an exact range covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self::with_errors(start, end, 0)
    }

    /// Creates a range covering `[start, end)` that contains `error_count` typos.
    pub fn with_errors(start: usize, end: usize, error_count: usize) -> Self {
        debug_assert!(start <= end, "inverted range [{start}, {end})");
        Self {
            start,
            end,
            error_count,
        }
    }

    /// Creates an exact range of `len` characters starting at `start`.
    pub fn from_len(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    /// First character offset covered by the range
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset right after the last covered character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of covered characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for the zero-width range produced by a trailing-space match
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of typo substitutions inside the range
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns true if `offset` lies inside the range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the same range moved `delta` characters to the right.
    #[must_use]
    pub fn shift_right(self, delta: usize) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
            error_count: self.error_count,
        }
    }

    /// Joins two touching ranges into one, summing their errors.
    pub(crate) fn join(self, next: Range) -> Self {
        debug_assert_eq!(self.end, next.start);
        Self::with_errors(self.start, next.end, self.error_count + next.error_count)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "[{}, {})", self.start, self.end)?;
        if self.error_count > 0 {
            write!(f, "~{}", self.error_count)?;
        }
        Ok(())
    }
}

/// Appends `range` to `ranges`, merging it into the last element when they touch.
///
/// Keeps the "no two ranges are contiguous" invariant of match results.
pub(crate) fn push_merged(ranges: &mut Vec<Range>, range: Range) {
    match ranges.last_mut() {
        Some(last) if last.end == range.start => *last = last.join(range),
        _ => ranges.push(range),
    }
}
