use serde::{Deserialize, Serialize};

/// Identifier of one decomposed cell.
///
/// Ids are assigned in creation order starting at 1 and are never reused.
/// The value 0 is reserved for obstacles / unlabeled pixels in a
/// [`LabelMap`](crate::LabelMap).
pub type CellId = u32;

/// Label painted on obstacle pixels.
pub const OBSTACLE_LABEL: CellId = 0;

/// Half-open row interval `[start, end)` within one grid column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowSpan {
    /// First row inside the span.
    pub start: usize,
    /// First row past the span.
    pub end: usize,
}

impl RowSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of rows covered. Degenerate spans report 0.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// A span with no rows (`end <= start`).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Strict overlap test: `max(starts) < min(ends)`.
    ///
    /// Touching or zero-length spans do not overlap.
    pub fn overlaps(&self, other: &RowSpan) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }
}
