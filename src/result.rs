//! Uniform result record returned to the API layer.

use std::time::Duration;

use serde::Serialize;

use crate::grid::Cell;

/// Outcome of one reroute search.
///
/// Success and failure share the same shape; a failed search differs only in
/// the flag, the empty path, and the message. Serializes to the JSON the
/// report layer stores and the UI renders.
#[derive(Clone, Debug, Serialize)]
pub struct PathResult {
    pub success: bool,
    pub path: Vec<Cell>,
    pub nodes_explored: usize,
    pub path_length: usize,
    pub compute_ms: f64,
    pub message: String,
}

impl PathResult {
    pub(crate) fn found(path: Vec<Cell>, nodes_explored: usize, elapsed: Duration) -> Self {
        let compute_ms = round_ms(elapsed);
        let message = format!(
            "Optimal path found: {} steps, {} nodes explored in {}ms",
            path.len(),
            nodes_explored,
            compute_ms
        );
        PathResult {
            success: true,
            path_length: path.len(),
            path,
            nodes_explored,
            compute_ms,
            message,
        }
    }

    pub(crate) fn not_found(nodes_explored: usize, elapsed: Duration) -> Self {
        PathResult {
            success: false,
            path: Vec::new(),
            nodes_explored,
            path_length: 0,
            compute_ms: round_ms(elapsed),
            message: "No path found — check obstacles or grid boundaries.".to_string(),
        }
    }
}

fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_result_is_fully_populated() {
        let path = vec![Cell::new(0, 5), Cell::new(1, 5)];
        let result = PathResult::found(path, 4, Duration::from_micros(1500));
        assert!(result.success);
        assert_eq!(result.path_length, 2);
        assert_eq!(result.nodes_explored, 4);
        assert_eq!(result.compute_ms, 1.5);
        assert!(result.message.contains("2 steps"));
        assert!(result.message.contains("4 nodes explored"));
    }

    #[test]
    fn not_found_result_has_empty_path_and_same_shape() {
        let result = PathResult::not_found(17, Duration::from_millis(2));
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length, 0);
        assert_eq!(result.nodes_explored, 17);
        assert!(result.message.contains("No path found"));
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let result = PathResult::found(vec![Cell::new(3, 4)], 1, Duration::ZERO);
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["path"][0]["col"], 3);
        assert_eq!(json["path"][0]["row"], 4);
        assert_eq!(json["path_length"], 1);
        assert!(json["compute_ms"].is_number());
        assert!(json["message"].is_string());
    }
}
