//! Thresholding and visualization helpers around the `image` crate.

use coverage_cells_core::{CellId, GridError, LabelMap, OccupancyGrid};
use image::{GrayImage, Rgb, RgbImage};

use crate::plan::{plan, CoveragePlan, PlanError};

/// Threshold a grayscale map into an occupancy grid.
///
/// Pixels strictly brighter than `threshold` count as free space; eroded
/// floor-plan maps conventionally use 127.
pub fn binary_from_gray(img: &GrayImage, threshold: u8) -> Result<OccupancyGrid, GridError> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&px| px > threshold).collect();
    OccupancyGrid::from_raw(width, height, data)
}

/// End-to-end helper: threshold a grayscale map and plan its coverage.
pub fn plan_gray(img: &GrayImage, threshold: u8, start: CellId) -> Result<CoveragePlan, PlanError> {
    let grid = binary_from_gray(img, threshold)?;
    plan(&grid, start)
}

/// Render a label map with one fixed color per cell id, obstacles black.
///
/// Colors walk the hue circle by the golden angle, so nearby ids get
/// clearly distinct colors and the palette is stable across runs.
pub fn colorize_labels(labels: &LabelMap) -> RgbImage {
    let width = labels.width() as u32;
    let height = labels.height() as u32;
    RgbImage::from_fn(width, height, |x, y| {
        let id = labels.label(x as usize, y as usize);
        if id == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb(cell_color(id))
        }
    })
}

/// Deterministic per-cell color.
fn cell_color(id: CellId) -> [u8; 3] {
    let hue = (id as f32 * 137.508) % 360.0;
    hsv_to_rgb(hue, 0.65, 0.95)
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let c = value * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    [
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ]
}
