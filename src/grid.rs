//! Occupancy grid for one floor plan.
//!
//! The grid is rebuilt for every reroute request and never shared between
//! searches. Cells use signed coordinates so that obstacle footprints
//! spilling past the grid edge are representable; out-of-bounds cells are
//! simply never passable.

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::Result;

/// One grid cell, addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Cell { col, row }
    }
}

/// Binary occupancy map of the floor plan
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create an empty grid, failing fast on non-positive dimensions.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Grid {
            cols: config.cols,
            rows: config.rows,
            blocked: vec![false; (config.cols * config.rows) as usize],
        })
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.row * self.cols + cell.col) as usize
    }

    /// Mark a cell as blocked by a shifted structural element.
    ///
    /// Out-of-bounds cells are ignored: projected footprints near the grid
    /// edge legitimately spill past it.
    pub fn mark_blocked(&mut self, cell: Cell) {
        if self.in_bounds(cell) {
            let idx = self.index(cell);
            self.blocked[idx] = true;
        }
    }

    /// True iff the cell is in-bounds and not blocked.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.index(cell)]
    }

    /// The passable axis-aligned neighbors of a cell.
    ///
    /// 4-directional movement only: MEP lines route horizontally and
    /// vertically, never diagonally.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(4);
        for (dc, dr) in &[(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let next = Cell::new(cell.col + dc, cell.row + dr);
            if self.is_passable(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Render the grid with a route for operator output.
    pub fn render_route(&self, path: &[Cell], start: Cell, end: Cell) -> String {
        let mut out = String::new();
        out.push_str("Legend: S=Start, E=End, *=Route, #=Blocked, .=Free\n");

        out.push_str("   ");
        for col in 0..self.cols {
            out.push_str(&format!("{:2}", col % 10));
        }
        out.push('\n');

        for row in 0..self.rows {
            out.push_str(&format!("{:2} ", row));
            for col in 0..self.cols {
                let cell = Cell::new(col, row);
                let glyph = if cell == start {
                    'S'
                } else if cell == end {
                    'E'
                } else if path.contains(&cell) {
                    '*'
                } else if !self.is_passable(cell) {
                    '#'
                } else {
                    '.'
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_20x10() -> Grid {
        Grid::new(&GridConfig::default()).unwrap()
    }

    #[test]
    fn fresh_grid_is_fully_passable() {
        let grid = grid_20x10();
        assert!(grid.is_passable(Cell::new(0, 0)));
        assert!(grid.is_passable(Cell::new(19, 9)));
    }

    #[test]
    fn blocked_cell_is_not_passable() {
        let mut grid = grid_20x10();
        grid.mark_blocked(Cell::new(5, 5));
        assert!(!grid.is_passable(Cell::new(5, 5)));
        assert!(grid.is_passable(Cell::new(5, 4)));
    }

    #[test]
    fn out_of_bounds_cells_are_never_passable() {
        let grid = grid_20x10();
        assert!(!grid.is_passable(Cell::new(-1, 0)));
        assert!(!grid.is_passable(Cell::new(0, -1)));
        assert!(!grid.is_passable(Cell::new(20, 0)));
        assert!(!grid.is_passable(Cell::new(0, 10)));
    }

    #[test]
    fn marking_out_of_bounds_is_a_silent_no_op() {
        let mut grid = grid_20x10();
        grid.mark_blocked(Cell::new(-5, 3));
        grid.mark_blocked(Cell::new(3, 42));
        for col in 0..20 {
            for row in 0..10 {
                assert!(grid.is_passable(Cell::new(col, row)));
            }
        }
    }

    #[test]
    fn corner_cell_has_two_neighbors() {
        let grid = grid_20x10();
        let neighbors = grid.neighbors(Cell::new(0, 0));
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&Cell::new(1, 0)));
        assert!(neighbors.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn blocked_neighbors_are_excluded() {
        let mut grid = grid_20x10();
        grid.mark_blocked(Cell::new(5, 4));
        grid.mark_blocked(Cell::new(5, 6));
        let neighbors = grid.neighbors(Cell::new(5, 5));
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&Cell::new(4, 5)));
        assert!(neighbors.contains(&Cell::new(6, 5)));
    }

    #[test]
    fn invalid_dimensions_fail_at_construction() {
        assert!(Grid::new(&GridConfig { cols: -2, rows: 10 }).is_err());
    }
}
