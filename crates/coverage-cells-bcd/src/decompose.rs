//! The column sweep: discovers, extends, splits, and terminates cells.

use std::collections::BTreeMap;

use coverage_cells_core::{CellId, LabelMap, OccupancyGrid, RowSpan};

use crate::slice::column_connectivity;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Everything the sweep produces for one grid.
#[derive(Clone, Debug)]
pub struct Decomposition {
    /// Per-pixel cell ids; 0 marks obstacles.
    pub labels: LabelMap,
    /// Total number of cells created by the sweep.
    pub cell_count: usize,
    /// Sorted list of the distinct cell ids present in `labels`.
    pub cell_ids: Vec<CellId>,
    /// Per-cell boundary history, one span appended per active column,
    /// in column-scan order.
    pub boundaries: BTreeMap<CellId, Vec<RowSpan>>,
    /// Deduplicated groups of cells that were split apart by an obstacle
    /// within a single column. Members must never be treated as adjacent.
    pub non_neighbor_groups: Vec<Vec<CellId>>,
}

/// Sweep the grid left to right and decompose its free space into cells.
///
/// The sweep carries the previous column's connectivity and active cell
/// list; `next_active` applies the transition rules between columns.
/// Input validation happens when the [`OccupancyGrid`] is constructed,
/// so the sweep itself cannot fail.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(grid), fields(width = grid.width(), height = grid.height()))
)]
pub fn decompose(grid: &OccupancyGrid) -> Decomposition {
    let mut labels = LabelMap::new(grid.width(), grid.height());
    let mut boundaries: BTreeMap<CellId, Vec<RowSpan>> = BTreeMap::new();
    let mut groups: Vec<Vec<CellId>> = Vec::new();

    let mut next_id: CellId = 1;
    let mut active: Vec<CellId> = Vec::new();
    let mut last_connectivity = 0usize;

    for x in 0..grid.width() {
        let (connectivity, segments) = column_connectivity(grid.column(x));

        active = next_active(last_connectivity, connectivity, &active, &mut next_id);
        last_connectivity = connectivity;
        if active.is_empty() {
            continue;
        }

        // Segment i belongs to active[i]; the transition rules keep the
        // two lists the same length whenever the column has free space.
        debug_assert_eq!(active.len(), segments.len());
        for (&id, &span) in active.iter().zip(segments.iter()) {
            labels.paint(x, span, id);
        }

        if active.len() == 1 {
            // Union row-range of the column, appended to the single
            // active cell's history.
            let span = RowSpan::new(segments[0].start, segments[segments.len() - 1].end);
            boundaries.entry(active[0]).or_default().push(span);
        } else {
            // The column contains an obstacle splitting the free space:
            // each cell records its own segment, and the whole set of
            // simultaneously active cells is one non-neighbor group.
            for (&id, &span) in active.iter().zip(segments.iter()) {
                boundaries.entry(id).or_default().push(span);
            }
            groups.push(active.clone());
        }
    }

    for group in &mut groups {
        group.sort_unstable();
    }
    groups.sort();
    groups.dedup();

    let cell_ids: Vec<CellId> = boundaries.keys().copied().collect();
    let cell_count = (next_id - 1) as usize;
    log::debug!(
        "decomposed {}x{} grid into {} cells, {} non-neighbor groups",
        grid.width(),
        grid.height(),
        cell_count,
        groups.len()
    );

    Decomposition {
        labels,
        cell_count,
        cell_ids,
        boundaries,
        non_neighbor_groups: groups,
    }
}

/// Transition rules between the previous column's active cells and the
/// current column's segments.
///
/// The `(last, current)` connectivity pair decides whether cells continue
/// (pass-through), split, or are created fresh. For more than two
/// concurrent regions only the equal-count pass-through is tracked; any
/// other change allocates fresh ids. Segment order is assumed stable
/// across pass-through columns; no positional re-matching is attempted.
fn next_active(
    last: usize,
    connectivity: usize,
    active: &[CellId],
    next_id: &mut CellId,
) -> Vec<CellId> {
    match (last, connectivity) {
        // All-obstacle column: nothing active, region tracking restarts.
        (_, 0) => Vec::new(),
        // Free space after an all-obstacle column (or the very first
        // column): every segment starts a fresh cell.
        (0, n) => allocate(n, next_id),
        // Straight run.
        (1, 1) => vec![active[0]],
        // Merge back to a single region: the merged cell is new.
        (_, 1) => allocate(1, next_id),
        // Two regions continuing side by side.
        (2, 2) => active.to_vec(),
        // A single region split in two (the "OUT" event), or a wider
        // change collapsing to two regions: both are new cells.
        (_, 2) => allocate(2, next_id),
        // Equal-count pass-through for k > 2 concurrent regions.
        (l, n) if l == n => active.to_vec(),
        // Any other change with k > 2 regions: all fresh.
        (_, n) => allocate(n, next_id),
    }
}

fn allocate(count: usize, next_id: &mut CellId) -> Vec<CellId> {
    let first = *next_id;
    *next_id += count as CellId;
    (first..*next_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(map: &str) -> OccupancyGrid {
        OccupancyGrid::from_ascii(map).unwrap()
    }

    /// Distinct nonzero labels, sorted.
    fn distinct_labels(labels: &LabelMap) -> Vec<CellId> {
        let mut ids: Vec<CellId> = labels.as_slice().iter().copied().filter(|&v| v != 0).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    #[test]
    fn corridor_is_a_single_cell() {
        let g = grid(
            "######\n\
             #....#\n\
             #....#\n\
             ######",
        );
        let result = decompose(&g);
        assert_eq!(result.cell_count, 1);
        assert_eq!(result.cell_ids, vec![1]);
        assert!(result.non_neighbor_groups.is_empty());
        // One boundary entry per active column, each spanning the free rows.
        assert_eq!(
            result.boundaries[&1],
            vec![RowSpan::new(1, 3); 4],
        );
    }

    #[test]
    fn every_free_pixel_is_labeled_and_obstacles_are_zero() {
        let g = grid(
            "########\n\
             #......#\n\
             #..##..#\n\
             #..##..#\n\
             #......#\n\
             ########",
        );
        let result = decompose(&g);
        for y in 0..g.height() {
            for x in 0..g.width() {
                let label = result.labels.label(x, y);
                if g.is_free(x, y) {
                    assert_ne!(label, 0, "free pixel ({x},{y}) unlabeled");
                } else {
                    assert_eq!(label, 0, "obstacle pixel ({x},{y}) labeled {label}");
                }
            }
        }
    }

    #[test]
    fn split_allocates_fresh_ids_and_records_a_group() {
        let g = grid(
            "########\n\
             #......#\n\
             #..##..#\n\
             #..##..#\n\
             #......#\n\
             ########",
        );
        let result = decompose(&g);
        assert_eq!(result.cell_count, 4);
        assert_eq!(result.cell_ids, vec![1, 2, 3, 4]);

        // Left lobe is cell 1; the split column introduces cells 2 (top)
        // and 3 (bottom); the merge on the right is a fresh cell 4.
        assert_eq!(result.labels.label(1, 2), 1);
        assert_eq!(result.labels.label(3, 1), 2);
        assert_eq!(result.labels.label(3, 4), 3);
        assert_eq!(result.labels.label(6, 2), 4);

        // The same split repeats over two columns but is recorded once.
        assert_eq!(result.non_neighbor_groups, vec![vec![2, 3]]);

        // Split columns record per-cell spans; single columns the union.
        assert_eq!(result.boundaries[&2], vec![RowSpan::new(1, 2); 2]);
        assert_eq!(result.boundaries[&3], vec![RowSpan::new(4, 5); 2]);
        assert_eq!(result.boundaries[&1], vec![RowSpan::new(1, 5); 2]);
        assert_eq!(result.boundaries[&4], vec![RowSpan::new(1, 5); 2]);
    }

    #[test]
    fn pass_through_keeps_ids_stable() {
        let g = grid(
            "######\n\
             #....#\n\
             ######\n\
             #....#\n\
             ######",
        );
        let result = decompose(&g);
        assert_eq!(result.cell_count, 2);
        for x in 1..5 {
            assert_eq!(result.labels.label(x, 1), 1);
            assert_eq!(result.labels.label(x, 3), 2);
        }
        assert_eq!(result.non_neighbor_groups, vec![vec![1, 2]]);
    }

    #[test]
    fn full_obstacle_column_restarts_region_tracking() {
        let g = grid(
            "#######\n\
             #..#..#\n\
             #..#..#\n\
             #######",
        );
        let result = decompose(&g);
        assert_eq!(result.cell_count, 2);
        assert_eq!(result.labels.label(1, 1), 1);
        assert_eq!(result.labels.label(5, 1), 2);
        // The two cells never share a column, so no group is recorded.
        assert!(result.non_neighbor_groups.is_empty());
    }

    #[test]
    fn three_way_pass_through_keeps_ids() {
        let g = grid(
            "#####\n\
             #...#\n\
             #####\n\
             #...#\n\
             #####\n\
             #...#\n\
             #####",
        );
        let result = decompose(&g);
        // Three regions pass through unchanged over three columns.
        assert_eq!(result.cell_count, 3);
        assert_eq!(result.non_neighbor_groups, vec![vec![1, 2, 3]]);
        for x in 1..4 {
            assert_eq!(result.labels.label(x, 1), 1);
            assert_eq!(result.labels.label(x, 3), 2);
            assert_eq!(result.labels.label(x, 5), 3);
        }
    }

    #[test]
    fn connectivity_change_above_two_allocates_fresh_ids() {
        // Columns 1-2 hold two regions, columns 3-4 three: going from
        // 2 to 3 regions is not tracked fine-grained, all ids are new.
        let g = grid(
            "######\n\
             #....#\n\
             #..###\n\
             ###..#\n\
             #..###\n\
             #....#\n\
             ######",
        );
        let result = decompose(&g);
        assert_eq!(result.cell_count, 5);
        assert_eq!(result.cell_ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            result.non_neighbor_groups,
            vec![vec![1, 2], vec![3, 4, 5]]
        );

        let ids = distinct_labels(&result.labels);
        assert_eq!(ids, result.cell_ids, "ids are 1..=N with no gaps");
    }

    #[test]
    fn label_set_matches_boundary_keys() {
        let g = grid(
            "########\n\
             #......#\n\
             #.##.#.#\n\
             #......#\n\
             ########",
        );
        let result = decompose(&g);
        assert_eq!(distinct_labels(&result.labels), result.cell_ids);
        assert_eq!(result.cell_ids.len(), result.cell_count);
    }
}
