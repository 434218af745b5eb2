//! Boustrophedon cellular decomposition (BCD) over binary occupancy grids.
//!
//! The sweep scans the grid column by column, tracking how the free space
//! of each column connects to the previous one, and carves the map into
//! sweep-traversable cells.
//!
//! ## Quickstart
//!
//! ```
//! use coverage_cells_bcd::{column_connectivity, decompose};
//! use coverage_cells_core::OccupancyGrid;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let col = [0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0].map(|v| v == 1);
//! let (connectivity, spans) = column_connectivity(col);
//! assert_eq!(connectivity, 4);
//! assert_eq!(spans.len(), 4);
//!
//! let grid = OccupancyGrid::from_ascii(
//!     "#####\n\
//!      #...#\n#####",
//! )?;
//! let result = decompose(&grid);
//! assert_eq!(result.cell_count, 1);
//! # Ok(())
//! # }
//! ```

mod decompose;
mod slice;

pub use decompose::{decompose, Decomposition};
pub use slice::column_connectivity;
