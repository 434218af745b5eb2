//! Core types for boustrophedon coverage decomposition.
//!
//! This crate is intentionally small and purely structural. It does *not*
//! know anything about the sweep algorithm or the cell graph; it only
//! provides the grid containers, the cell identifier, row spans, and the
//! input-validation error taxonomy shared by the rest of the workspace.

mod cell;
mod error;
mod grid;
mod logger;

pub use cell::{CellId, RowSpan, OBSTACLE_LABEL};
pub use error::GridError;
pub use grid::{LabelMap, OccupancyGrid};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
