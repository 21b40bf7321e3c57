//! Explicit configuration for the grid and the pixel-to-cell projection.
//!
//! Both structs deserialize directly from API request bodies; every field has
//! a serde default so partial requests fall back to the floor-plan defaults.

use serde::{Deserialize, Serialize};

use crate::error::{RerouteError, Result};

mod defaults {
    pub fn cols() -> i32 {
        20
    }
    pub fn rows() -> i32 {
        10
    }
    pub fn img_side() -> i32 {
        640
    }
}

/// Floor-plan grid dimensions
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of grid columns
    #[serde(default = "defaults::cols")]
    pub cols: i32,

    /// Number of grid rows
    #[serde(default = "defaults::rows")]
    pub rows: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: defaults::cols(),
            rows: defaults::rows(),
        }
    }
}

impl GridConfig {
    /// Reject non-positive dimensions before any search work begins.
    pub fn validate(&self) -> Result<()> {
        if self.cols <= 0 || self.rows <= 0 {
            return Err(RerouteError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

/// Dimensions of the image the detection coordinates were produced on
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "defaults::img_side")]
    pub img_width: i32,

    #[serde(default = "defaults::img_side")]
    pub img_height: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            img_width: defaults::img_side(),
            img_height: defaults::img_side(),
        }
    }
}
