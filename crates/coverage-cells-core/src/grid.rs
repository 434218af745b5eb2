use crate::cell::{CellId, RowSpan, OBSTACLE_LABEL};
use crate::error::GridError;

/// Immutable binary occupancy grid, row-major, `true` = free space.
///
/// The grid is validated on construction and never mutated by the
/// decomposition pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    data: Vec<bool>, // row-major, len = width * height
}

impl OccupancyGrid {
    /// Build a grid from a row-major buffer.
    ///
    /// Fails if either dimension is zero or the buffer length does not
    /// match `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<bool>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Parse an ASCII map: `.` = free, `#` = obstacle, one line per row.
    ///
    /// Leading/trailing blank lines are ignored; all rows must have the
    /// same width. Handy for fixtures and small maps.
    pub fn from_ascii(map: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridError::EmptyDimensions {
                width: 0,
                height: 0,
            });
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    '.' => data.push(true),
                    '#' => data.push(false),
                    other => {
                        return Err(GridError::UnknownGlyph {
                            row,
                            col,
                            glyph: other,
                        })
                    }
                }
            }
        }
        Self::from_raw(width, height, data)
    }

    /// Grid width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether pixel `(x, y)` is free space.
    #[inline]
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Iterate one column top to bottom.
    #[inline]
    pub fn column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        debug_assert!(x < self.width);
        self.data[x..].iter().step_by(self.width).copied()
    }

    /// Raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}

/// Output label map of a decomposition: 0 = obstacle, `1..=N` = cell ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    width: usize,
    height: usize,
    data: Vec<CellId>, // row-major, len = width * height
}

impl LabelMap {
    /// All-zero (unlabeled) map of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![OBSTACLE_LABEL; width * height],
        }
    }

    /// Map width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Label at pixel `(x, y)`.
    #[inline]
    pub fn label(&self, x: usize, y: usize) -> CellId {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Paint `id` over `rows` in column `x`.
    pub fn paint(&mut self, x: usize, rows: RowSpan, id: CellId) {
        debug_assert!(x < self.width && rows.end <= self.height);
        for y in rows.start..rows.end {
            self.data[y * self.width + x] = id;
        }
    }

    /// Raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[CellId] {
        &self.data
    }
}
