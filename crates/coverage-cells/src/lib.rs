//! High-level facade crate for the `coverage-cells-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying decomposition and
//!   graph crates
//! - the end-to-end [`plan`] pipeline: sweep → adjacency → visit order
//! - JSON report helpers ([`io`])
//! - (feature `image`) grayscale thresholding and label-map colorization
//!
//! ## Quickstart
//!
//! ```
//! use coverage_cells::{plan, OccupancyGrid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = OccupancyGrid::from_ascii(
//!     "########\n\
//!      #......#\n\
//!      #..##..#\n\
//!      #..##..#\n\
//!      #......#\n########",
//! )?;
//!
//! let plan = plan(&grid, 1)?;
//! assert_eq!(plan.decomposition.cell_count, 4);
//! assert_eq!(plan.visit_order[0], 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `coverage_cells::core`: grid containers, cell ids, row spans, errors.
//! - `coverage_cells::bcd`: the column sweep (`column_connectivity`, `decompose`).
//! - `coverage_cells::graph`: adjacency construction and depth-first ordering.
//! - `coverage_cells::io`: JSON coverage reports.
//! - `coverage_cells::raster` (feature `image`): thresholding and colorization.

pub use coverage_cells_bcd as bcd;
pub use coverage_cells_core as core;
pub use coverage_cells_graph as graph;

pub use coverage_cells_bcd::{column_connectivity, decompose, Decomposition};
pub use coverage_cells_core::{CellId, GridError, LabelMap, OccupancyGrid, RowSpan};
pub use coverage_cells_graph::{
    build_adjacency, depth_first_order, AdjacencyBuild, AdjacencyGraph, BuildWarning,
};

mod plan;
pub use plan::{plan, CoveragePlan, PlanError};

pub mod io;

#[cfg(feature = "image")]
pub mod raster;
