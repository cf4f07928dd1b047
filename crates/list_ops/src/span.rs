use std::ops::Range;

use crate::error::{Result, SeqError};

/// Resolve an element index against `len`.
///
/// Negative indices count from the end (`-1` is the last element). The
/// resolved position must lie in `0..len`.
#[inline]
pub fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };
    resolved
        .filter(|&i| i < len)
        .ok_or(SeqError::IndexOutOfRange { index, len })
}

/// Resolve a range bound against `len`, clamping into `0..=len`.
#[inline]
pub fn resolve_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(len)
    }
}

/// Half-open span `[start, end)` with optional, possibly negative bounds.
///
/// - A missing `start` means the front, a missing `end` means the back.
/// - Bounds past either end are clamped.
/// - A span whose end resolves before its start is empty at `start`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: Option<isize>,
    pub end: Option<isize>,
}

impl Span {
    pub const FULL: Self = Self {
        start: None,
        end: None,
    };

    /// Empty span past the last element; splicing into it appends.
    pub const END: Self = Self {
        start: Some(isize::MAX),
        end: None,
    };

    pub const fn new(start: isize, end: isize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub const fn starting_at(start: isize) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub const fn ending_at(end: isize) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn resolve(self, len: usize) -> Range<usize> {
        let start = self.start.map_or(0, |b| resolve_bound(b, len));
        let end = self.end.map_or(len, |b| resolve_bound(b, len)).max(start);
        start..end
    }
}
