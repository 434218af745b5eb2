//! Column connectivity: maximal runs of free cells within one column.

use coverage_cells_core::RowSpan;

/// Scan one column top to bottom and collect maximal free runs as
/// half-open row spans, in increasing row order.
///
/// Returns `(connectivity, spans)` where `connectivity == spans.len()`.
///
/// A run that is still open when the column ends is **not** emitted: the
/// sweep only closes a segment on a free→obstacle transition. Occupancy
/// maps produced by eroding a camera or floor-plan image always carry an
/// obstacle border, so the bottom row is expected to be an obstacle.
/// Known limitation, kept as-is.
///
/// ```
/// use coverage_cells_bcd::column_connectivity;
///
/// let col = [0, 0, 1, 1, 0, 1, 0].map(|v| v == 1);
/// let (connectivity, spans) = column_connectivity(col);
/// assert_eq!(connectivity, 2);
/// assert_eq!((spans[0].start, spans[0].end), (2, 4));
/// assert_eq!((spans[1].start, spans[1].end), (5, 6));
/// ```
pub fn column_connectivity<I>(column: I) -> (usize, Vec<RowSpan>)
where
    I: IntoIterator<Item = bool>,
{
    let mut spans = Vec::new();
    let mut open_at: Option<usize> = None;
    let mut last = false;

    for (row, free) in column.into_iter().enumerate() {
        match (last, free) {
            (false, true) => open_at = Some(row),
            (true, false) => {
                if let Some(start) = open_at.take() {
                    spans.push(RowSpan::new(start, row));
                }
            }
            _ => {}
        }
        last = free;
    }

    (spans.len(), spans)
}
