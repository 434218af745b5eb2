use coverage_cells_bcd::{decompose, Decomposition};
use coverage_cells_core::{CellId, GridError, OccupancyGrid};
use coverage_cells_graph::{build_adjacency, depth_first_order, AdjacencyGraph, BuildWarning};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the end-to-end pipeline helpers.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("start cell {start} is not one of the {cell_count} decomposed cells")]
    UnknownStart { start: CellId, cell_count: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Full output of one coverage-planning run.
#[derive(Clone, Debug)]
pub struct CoveragePlan {
    /// Sweep output: labels, boundaries, non-neighbor groups.
    pub decomposition: Decomposition,
    /// Symmetric cell adjacency.
    pub adjacency: AdjacencyGraph,
    /// Non-fatal diagnostics from the graph build. A non-empty list means
    /// the adjacency may be incomplete.
    pub warnings: Vec<BuildWarning>,
    /// Depth-first visitation order over the component containing the
    /// start cell.
    pub visit_order: Vec<CellId>,
}

/// Run the whole pipeline: sweep the grid, build the adjacency graph and
/// order the cells for visitation starting at `start`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(grid), fields(width = grid.width(), height = grid.height(), start))
)]
pub fn plan(grid: &OccupancyGrid, start: CellId) -> Result<CoveragePlan, PlanError> {
    let decomposition = decompose(grid);
    if decomposition.cell_ids.binary_search(&start).is_err() {
        return Err(PlanError::UnknownStart {
            start,
            cell_count: decomposition.cell_count,
        });
    }

    let build = build_adjacency(
        &decomposition.cell_ids,
        &decomposition.boundaries,
        &decomposition.non_neighbor_groups,
    );
    let visit_order = depth_first_order(&build.graph, start);
    log::info!(
        "planned coverage of {} cells, visiting {} from cell {start}",
        decomposition.cell_count,
        visit_order.len()
    );

    Ok(CoveragePlan {
        decomposition,
        adjacency: build.graph,
        warnings: build.warnings,
        visit_order,
    })
}
