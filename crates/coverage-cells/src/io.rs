//! JSON report helpers for coverage plans.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use coverage_cells_core::{CellId, OccupancyGrid, RowSpan};
use coverage_cells_graph::AdjacencyGraph;
use serde::{Deserialize, Serialize};

use crate::plan::CoveragePlan;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Serializable summary of one coverage-planning run.
///
/// The label map itself is omitted; consumers that need it render it from
/// the plan directly (see `raster::colorize_labels` with feature `image`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub width: usize,
    pub height: usize,
    pub cell_count: usize,
    pub cell_ids: Vec<CellId>,
    pub boundaries: BTreeMap<CellId, Vec<RowSpan>>,
    pub non_neighbor_groups: Vec<Vec<CellId>>,
    pub adjacency: AdjacencyGraph,
    pub visit_order: Vec<CellId>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl CoverageReport {
    /// Build a report from a finished plan.
    pub fn from_plan(grid: &OccupancyGrid, plan: &CoveragePlan) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cell_count: plan.decomposition.cell_count,
            cell_ids: plan.decomposition.cell_ids.clone(),
            boundaries: plan.decomposition.boundaries.clone(),
            non_neighbor_groups: plan.decomposition.non_neighbor_groups.clone(),
            adjacency: plan.adjacency.clone(),
            visit_order: plan.visit_order.clone(),
            warnings: plan.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
