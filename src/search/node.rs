//! Frontier entries and their priority ordering.

use std::cmp::Ordering;

use crate::grid::Cell;

/// One entry in the open frontier.
///
/// A cell may appear in the heap more than once after being re-discovered
/// through a cheaper path; stale entries are skipped on pop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct FrontierEntry {
    pub cell: Cell,
    /// Cost from start in unit steps
    pub g: u32,
    /// Manhattan distance to the goal
    pub h: u32,
    /// g + h
    pub f: u32,
    /// Insertion sequence number, makes the order total and reproducible
    pub seq: u64,
}

impl FrontierEntry {
    pub fn new(cell: Cell, g: u32, h: u32, seq: u64) -> Self {
        FrontierEntry {
            cell,
            g,
            h,
            f: g + h,
            seq,
        }
    }
}

impl Ord for FrontierEntry {
    /// Reversed comparison to make `BinaryHeap` a min-heap.
    ///
    /// Ties on `f` break on lower `h` (prefer nodes closer to the goal),
    /// then on earlier insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
