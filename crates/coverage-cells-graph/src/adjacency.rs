//! Adjacency graph construction from accumulated cell boundaries.

use std::collections::{BTreeMap, BTreeSet};

use coverage_cells_core::{CellId, RowSpan};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Symmetric, undirected adjacency over cell ids.
///
/// Every known cell is present as a node, isolated cells included, so
/// membership checks and traversal starts are uniform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    edges: BTreeMap<CellId, BTreeSet<CellId>>,
}

impl AdjacencyGraph {
    /// Register a cell with no edges yet.
    pub fn insert_cell(&mut self, id: CellId) {
        self.edges.entry(id).or_default();
    }

    /// Register a symmetric edge between two cells.
    pub fn insert_edge(&mut self, a: CellId, b: CellId) {
        debug_assert_ne!(a, b);
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
    }

    /// Whether `id` is a node of the graph.
    pub fn contains(&self, id: CellId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Neighbors of `id`, ascending, if the cell is known.
    pub fn neighbors(&self, id: CellId) -> Option<&BTreeSet<CellId>> {
        self.edges.get(&id)
    }

    /// All cells, ascending.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.edges.keys().copied()
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

/// Non-fatal diagnostics recovered during graph construction.
///
/// Warnings leave the graph possibly incomplete rather than aborting the
/// build; callers should treat their count as a data-quality signal.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum BuildWarning {
    #[error("cell {cell} has a degenerate boundary span {start}..{end}; entry skipped")]
    MalformedBoundary {
        cell: CellId,
        start: usize,
        end: usize,
    },

    #[error("cell {cell} is missing from the boundary map; its adjacency is skipped")]
    MissingCell { cell: CellId },
}

/// Graph plus the warnings recovered while building it.
#[derive(Clone, Debug)]
pub struct AdjacencyBuild {
    pub graph: AdjacencyGraph,
    pub warnings: Vec<BuildWarning>,
}

/// Build the adjacency graph over `cell_ids`.
///
/// Cells `a != b` are adjacent iff they are not co-members of any
/// non-neighbor group and at least one boundary span of `a` strictly
/// overlaps one of `b`. Degenerate spans and ids missing from the
/// boundary map are skipped with a warning.
///
/// Pairwise scan, `O(C² · B²)`; fine for the tens-to-hundreds of cells a
/// typical decomposition produces.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(cells = cell_ids.len(), groups = groups.len()))
)]
pub fn build_adjacency(
    cell_ids: &[CellId],
    boundaries: &BTreeMap<CellId, Vec<RowSpan>>,
    groups: &[Vec<CellId>],
) -> AdjacencyBuild {
    let mut warnings = Vec::new();

    // Validate each cell's boundary history once, not per pair.
    let mut spans_by_cell: BTreeMap<CellId, Vec<RowSpan>> = BTreeMap::new();
    for &cell in cell_ids {
        let Some(history) = boundaries.get(&cell) else {
            log::warn!("cell {cell} has no boundary history; skipping");
            warnings.push(BuildWarning::MissingCell { cell });
            continue;
        };
        let mut valid = Vec::with_capacity(history.len());
        for span in history {
            if span.is_empty() {
                log::warn!(
                    "cell {cell}: degenerate boundary span {}..{}",
                    span.start,
                    span.end
                );
                warnings.push(BuildWarning::MalformedBoundary {
                    cell,
                    start: span.start,
                    end: span.end,
                });
                continue;
            }
            valid.push(*span);
        }
        spans_by_cell.insert(cell, valid);
    }

    let mut graph = AdjacencyGraph::default();
    for &cell in spans_by_cell.keys() {
        graph.insert_cell(cell);
    }

    let present: Vec<CellId> = spans_by_cell.keys().copied().collect();
    for (i, &a) in present.iter().enumerate() {
        for &b in &present[i + 1..] {
            if co_grouped(a, b, groups) {
                continue;
            }
            if spans_overlap(&spans_by_cell[&a], &spans_by_cell[&b]) {
                graph.insert_edge(a, b);
            }
        }
    }

    log::debug!(
        "adjacency graph: {} cells, {} edges, {} warnings",
        graph.cell_count(),
        graph.edge_count(),
        warnings.len()
    );

    AdjacencyBuild { graph, warnings }
}

/// Whether `{a, b}` is a subset of any non-neighbor group.
fn co_grouped(a: CellId, b: CellId, groups: &[Vec<CellId>]) -> bool {
    groups
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

fn spans_overlap(lhs: &[RowSpan], rhs: &[RowSpan]) -> bool {
    lhs.iter()
        .any(|a| rhs.iter().any(|b| a.overlaps(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(entries: &[(CellId, &[(usize, usize)])]) -> BTreeMap<CellId, Vec<RowSpan>> {
        entries
            .iter()
            .map(|&(cell, spans)| {
                (
                    cell,
                    spans.iter().map(|&(s, e)| RowSpan::new(s, e)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn overlapping_cells_are_adjacent_both_ways() {
        let bounds = boundaries(&[(1, &[(0, 5)]), (2, &[(3, 8)]), (3, &[(6, 9)])]);
        let build = build_adjacency(&[1, 2, 3], &bounds, &[]);
        assert!(build.warnings.is_empty());

        let graph = &build.graph;
        assert!(graph.neighbors(1).unwrap().contains(&2));
        assert!(graph.neighbors(2).unwrap().contains(&1));
        assert!(graph.neighbors(2).unwrap().contains(&3));
        // 1 ends at row 5, 3 starts at row 6.
        assert!(!graph.neighbors(1).unwrap().contains(&3));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn touching_spans_do_not_connect() {
        let bounds = boundaries(&[(1, &[(0, 4)]), (2, &[(4, 8)])]);
        let build = build_adjacency(&[1, 2], &bounds, &[]);
        assert_eq!(build.graph.edge_count(), 0);
    }

    #[test]
    fn non_neighbor_groups_suppress_overlap() {
        // Full overlap, but the cells were split by an obstacle.
        let bounds = boundaries(&[(1, &[(0, 10)]), (2, &[(0, 10)]), (3, &[(2, 6)])]);
        let build = build_adjacency(&[1, 2, 3], &bounds, &[vec![1, 2]]);

        let graph = &build.graph;
        assert!(!graph.neighbors(1).unwrap().contains(&2));
        assert!(graph.neighbors(1).unwrap().contains(&3));
        assert!(graph.neighbors(2).unwrap().contains(&3));
    }

    #[test]
    fn group_membership_is_pairwise_within_one_group() {
        // 1 and 3 sit in different groups; that does not make them
        // non-neighbors of each other.
        let bounds = boundaries(&[(1, &[(0, 10)]), (2, &[(0, 10)]), (3, &[(0, 10)])]);
        let build = build_adjacency(&[1, 2, 3], &bounds, &[vec![1, 2], vec![2, 3]]);
        assert!(build.graph.neighbors(1).unwrap().contains(&3));
        assert!(!build.graph.neighbors(1).unwrap().contains(&2));
        assert!(!build.graph.neighbors(2).unwrap().contains(&3));
    }

    #[test]
    fn degenerate_spans_warn_and_are_skipped() {
        let bounds = boundaries(&[(1, &[(5, 5), (0, 3)]), (2, &[(2, 4)])]);
        let build = build_adjacency(&[1, 2], &bounds, &[]);
        assert_eq!(
            build.warnings,
            vec![BuildWarning::MalformedBoundary {
                cell: 1,
                start: 5,
                end: 5
            }]
        );
        // The valid entry still drives adjacency.
        assert!(build.graph.neighbors(1).unwrap().contains(&2));
    }

    #[test]
    fn missing_cells_warn_and_are_skipped() {
        let bounds = boundaries(&[(1, &[(0, 3)])]);
        let build = build_adjacency(&[1, 9], &bounds, &[]);
        assert_eq!(build.warnings, vec![BuildWarning::MissingCell { cell: 9 }]);
        assert!(build.graph.contains(1));
        assert!(!build.graph.contains(9));
    }

    #[test]
    fn isolated_cells_are_still_nodes() {
        let bounds = boundaries(&[(1, &[(0, 3)]), (2, &[(7, 9)])]);
        let build = build_adjacency(&[1, 2], &bounds, &[]);
        assert!(build.graph.contains(2));
        assert!(build.graph.neighbors(2).unwrap().is_empty());
    }
}
