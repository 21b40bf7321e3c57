//! A* search over the occupancy grid.

use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{Cell, Grid};
use crate::result::PathResult;

use super::node::FrontierEntry;

/// 4-directional unit-cost A* pathfinder over a prepared grid
pub struct AStar<'a> {
    grid: &'a Grid,
}

impl<'a> AStar<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        AStar { grid }
    }

    /// Find a minimum-step route from `start` to `end`.
    ///
    /// A frontier exhausted before reaching `end` is a normal outcome and
    /// yields a failed [`PathResult`], never an error. A blocked or off-grid
    /// endpoint is not validated up front; the search simply never finds a
    /// way into or out of it.
    pub fn find_path(&self, start: Cell, end: Cell) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) end=({},{})",
            start.col,
            start.row,
            end.col,
            end.row
        );
        let search_start = Instant::now();

        let mut open = BinaryHeap::new();
        let mut closed: FxHashSet<Cell> = FxHashSet::default();
        let mut g_scores: FxHashMap<Cell, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();

        let mut seq = 0u64;
        open.push(FrontierEntry::new(start, 0, manhattan(start, end), seq));
        g_scores.insert(start, 0);

        let mut nodes_explored = 0;

        while let Some(current) = open.pop() {
            if closed.contains(&current.cell) {
                continue;
            }
            nodes_explored += 1;

            if current.cell == end {
                let path = reconstruct_path(&came_from, end);
                trace!(
                    "[AStar] route found: length={} nodes_explored={}",
                    path.len(),
                    nodes_explored
                );
                return PathResult::found(path, nodes_explored, search_start.elapsed());
            }

            closed.insert(current.cell);

            for neighbor in self.grid.neighbors(current.cell) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current.g + 1;
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < known_g {
                    g_scores.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, current.cell);
                    seq += 1;
                    open.push(FrontierEntry::new(
                        neighbor,
                        tentative_g,
                        manhattan(neighbor, end),
                        seq,
                    ));
                }
            }
        }

        debug!(
            "[AStar] no route after exploring {} nodes",
            nodes_explored
        );
        PathResult::not_found(nodes_explored, search_start.elapsed())
    }
}

/// Manhattan distance, the admissible heuristic for 4-directional unit-cost
/// movement.
fn manhattan(a: Cell, b: Cell) -> u32 {
    ((a.col - b.col).abs() + (a.row - b.row).abs()) as u32
}

/// Walk the back-pointers from the goal to the start and reverse.
fn reconstruct_path(came_from: &FxHashMap<Cell, Cell>, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
