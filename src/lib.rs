//! Grid-based A* rerouting core for MEP lines.
//!
//! When a detected structural element deviates from its design position, the
//! mechanical/electrical/plumbing lines routed past it need a new path. This
//! crate owns the hard part of that flow: the floor-plan occupancy grid, the
//! projection of a pixel-space detection onto blocked grid cells, the A*
//! search itself, and the packaged result with search diagnostics.
//!
//! The HTTP layer, the object detector, persistence, and any UI live outside
//! this crate; they hand in plain numbers and get a [`PathResult`] back.
//!
//! ```
//! use mep_reroute::{compute_reroute, project_obstacle, GridConfig, ProjectionConfig};
//!
//! let config = GridConfig::default();
//! let obstacles = project_obstacle(300, 150, &ProjectionConfig::default(), &config);
//! let result = compute_reroute(&obstacles, None, None, &config).unwrap();
//! assert!(result.success);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod projector;
pub mod result;
pub mod search;

pub use config::{GridConfig, ProjectionConfig};
pub use error::{RerouteError, Result};
pub use grid::{Cell, Grid};
pub use projector::project_obstacle;
pub use result::PathResult;
pub use search::AStar;

/// Compute a new MEP route around the given obstacle cells.
///
/// Builds a fresh grid, marks the obstacles (out-of-bounds cells are
/// dropped), then runs the A* search. `start` defaults to the left-center
/// cell of the floor plan and `end` to the right-center cell, the standard
/// pipe run. Fails only on invalid grid dimensions; an unreachable end cell
/// is reported inside the returned [`PathResult`].
pub fn compute_reroute(
    obstacle_cells: &[Cell],
    start: Option<Cell>,
    end: Option<Cell>,
    config: &GridConfig,
) -> Result<PathResult> {
    let mut grid = Grid::new(config)?;
    for &cell in obstacle_cells {
        grid.mark_blocked(cell);
    }

    let start = start.unwrap_or_else(|| Cell::new(0, config.rows / 2));
    let end = end.unwrap_or_else(|| Cell::new(config.cols - 1, config.rows / 2));

    Ok(AStar::new(&grid).find_path(start, end))
}
