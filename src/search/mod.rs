//! A* route search.
//!
//! The frontier is a `BinaryHeap` ordered by `f = g + h` with a documented
//! deterministic tie-break (see [`node`]), so repeated searches over the same
//! grid always select the same route among equal-cost alternatives.

mod engine;
mod node;

pub use engine::AStar;
