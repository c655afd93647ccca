//! Range addressing
//!
//! Resolves the (start, end) pairs used by `GRID.RANGE` and `GRID.SET`.
//! Negative indices count back from the end of the axis, so `-1` is the last
//! valid index. A start greater than its end is not an error: the span walks
//! backwards, inclusive at both ends, and each axis keeps its own direction.

use crate::error::{GridError, Result};

/// Resolve one range endpoint against an axis of length `len`
///
/// Negative values resolve to `len + index`; anything still outside
/// `0..len` after resolution is rejected.
pub fn resolve_index(index: i64, len: usize) -> Result<usize> {
    let n = len as i64;
    let resolved = if index < 0 { n + index } else { index };
    if resolved < 0 || resolved >= n {
        return Err(GridError::RangeOutOfBounds { index, len });
    }
    Ok(resolved as usize)
}

/// An inclusive, possibly descending walk over one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Resolve both endpoints of a requested range
    pub fn resolve(start: i64, end: i64, len: usize) -> Result<Self> {
        Ok(Self {
            start: resolve_index(start, len)?,
            end: resolve_index(end, len)?,
        })
    }

    /// Already-resolved endpoints
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices the span covers
    pub fn len(&self) -> usize {
        1 + self.start.abs_diff(self.end)
    }

    /// A span always covers at least one index
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    /// Walk the span in its direction, both endpoints included
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (start, end, descending) = (self.start, self.end, self.is_descending());
        let mut next = Some(start);
        std::iter::from_fn(move || {
            let current = next?;
            next = if current == end {
                None
            } else if descending {
                Some(current - 1)
            } else {
                Some(current + 1)
            };
            Some(current)
        })
    }
}
