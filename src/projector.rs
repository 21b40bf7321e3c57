//! Obstacle projection from detection pixel space to grid cells.

use crate::config::{GridConfig, ProjectionConfig};
use crate::grid::Cell;

/// Footprint extent around the projected center cell.
///
/// The rectangle is deliberately asymmetric (4 columns x 8 rows, biased
/// right and down from the center) to cover the direction a pillar or beam
/// extends from its detected centroid in plan view. Callers needing a
/// symmetric footprint must derive their own offsets.
const COL_OFFSETS: std::ops::Range<i32> = -1..3;
const ROW_OFFSETS: std::ops::Range<i32> = -2..6;

/// Convert a detected pixel position into the block of grid cells covered
/// by the structural element's plan footprint.
///
/// Cells that fall outside the grid are included in the output; the grid
/// drops them when they are marked.
pub fn project_obstacle(
    detected_x: i32,
    detected_y: i32,
    projection: &ProjectionConfig,
    grid: &GridConfig,
) -> Vec<Cell> {
    let cell_w = projection.img_width as f64 / grid.cols as f64;
    let cell_h = projection.img_height as f64 / grid.rows as f64;

    let col = (detected_x as f64 / cell_w) as i32;
    let row = (detected_y as f64 / cell_h) as i32;

    let mut cells = Vec::with_capacity(COL_OFFSETS.len() * ROW_OFFSETS.len());
    for dc in COL_OFFSETS {
        for dr in ROW_OFFSETS {
            cells.push(Cell::new(col + dc, row + dr));
        }
    }
    cells
}
