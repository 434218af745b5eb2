/// Errors raised while validating grid input.
///
/// All of these are fatal and are reported before any sweep state is
/// created; a successfully constructed [`OccupancyGrid`](crate::OccupancyGrid)
/// cannot fail later stages of the pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive (width={width}, height={height})")]
    EmptyDimensions { width: usize, height: usize },

    #[error("grid buffer length mismatch (expected {expected} cells, got {got})")]
    BufferLength { expected: usize, got: usize },

    #[error("grid row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}
